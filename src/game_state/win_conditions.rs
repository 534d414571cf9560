//! Missile-based terminal conditions.
//!
//! Dynamo Chess has no checkmate. A game ends when one side has lost both
//! Missiles, or when a side's last Missile closes in on the enemy king while
//! that king is stuck in a corner.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::MISSILE_MATE_DISTANCE;
use crate::game_state::chess_types::{Color, GameOutcome, PieceKind, WinReason};

/// Winner by Missile capture: the side whose opponent has no Missile left.
pub fn missile_capture_winner(board: &Board) -> Option<Color> {
    if board.count(Color::White, PieceKind::Missile) == 0 {
        Some(Color::Black)
    } else if board.count(Color::Black, PieceKind::Missile) == 0 {
        Some(Color::White)
    } else {
        None
    }
}

/// Winner by Missile Mate, checking `first` before its opponent.
pub fn missile_mate_winner(board: &Board, first: Color) -> Option<Color> {
    [first, first.opposite()]
        .into_iter()
        .find(|&color| has_missile_mate(board, color))
}

fn has_missile_mate(board: &Board, color: Color) -> bool {
    let mut missiles = board.find(color, PieceKind::Missile);
    let (Some(missile), None) = (missiles.next(), missiles.next()) else {
        return false;
    };
    let Some(king) = board.king_square(color.opposite()) else {
        return false;
    };
    king.is_corner() && missile.manhattan_distance(king) <= MISSILE_MATE_DISTANCE
}

/// Outcome of the position reached by a move of `mover`.
pub fn detect_outcome(board: &Board, mover: Color) -> Option<GameOutcome> {
    if let Some(winner) = missile_capture_winner(board) {
        return Some(GameOutcome {
            winner,
            reason: WinReason::MissilesCaptured,
        });
    }
    missile_mate_winner(board, mover).map(|winner| GameOutcome {
        winner,
        reason: WinReason::MissileMate,
    })
}
