//! Check detection.
//!
//! A square is attacked when any piece of the attacking colour has it among
//! its attack targets. Works for either colour at any time; a board without
//! the king in question is never "in check".

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::pseudo_legal_moves::attack_targets;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        trace!(%color, "no king on board, reporting not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(32);
    board.pieces_of(attacker_color).any(|(from, piece)| {
        targets.clear();
        attack_targets(board, from, piece, &mut targets);
        targets.contains(&square)
    })
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut targets = Vec::with_capacity(32);
    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| {
            targets.clear();
            attack_targets(board, from, piece, &mut targets);
            targets.contains(&square)
        })
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
