//! Pawn pushes, multi-square first advances, captures and en passant.
//!
//! Pawns on their own pawn row or the row in front of it may advance two or
//! three squares as long as every square on the way is empty. A pawn that just
//! made such an advance can be taken en passant from an adjacent column.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{is_pawn_starting_row, MAX_PAWN_ADVANCE};
use crate::game_state::chess_types::{Color, PieceKind, Square};

pub fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if is_pawn_starting_row(color, from.row()) {
                let mut current = one_step;
                for _ in 2..=MAX_PAWN_ADVANCE {
                    match current.offset(forward, 0) {
                        Some(next) if board.is_empty_at(next) => {
                            out.push(next);
                            current = next;
                        }
                        _ => break,
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != color {
                out.push(to);
            }
        } else if en_passant_victim(board, from, d_col, color).is_some() {
            out.push(to);
        }
    }
}

/// Square of an enemy pawn beside `from` (column offset `d_col`) that may be
/// captured en passant.
pub fn en_passant_victim(board: &Board, from: Square, d_col: i8, color: Color) -> Option<Square> {
    let beside = from.offset(0, d_col)?;
    let piece = board.piece_at(beside)?;
    (piece.is(color.opposite(), PieceKind::Pawn) && piece.en_passant_eligible).then_some(beside)
}
