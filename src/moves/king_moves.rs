//! King steps and castling candidates.
//!
//! Castling is offered as "move the king onto the rook's square": a same
//! colour rook 3 columns away toward the j-file (kingside) or 4 columns away
//! toward the a-file (queenside), with every square in between empty. The executor turns that into the usual king-two-squares,
//! rook-beside-king placement.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::back_rank_row;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::sliding_moves::leaper_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `(direction, distance)` of the castling rook: kingside `+3`, queenside `-4`.
pub const CASTLING_ROOK_OFFSETS: [(i8, i8); 2] = [(1, 3), (-1, 4)];

/// One-square steps only; these are the squares a king attacks.
#[inline]
pub fn king_steps(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    leaper_moves(board, from, color, &KING_OFFSETS, out);
}

pub fn king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    king_steps(board, from, color, out);
    castling_moves(board, from, color, out);
}

pub fn castling_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    if from.row() != back_rank_row(color) {
        return;
    }

    for (direction, distance) in CASTLING_ROOK_OFFSETS {
        let Some(rook_square) = from.offset(0, direction * distance) else {
            continue;
        };
        let is_own_rook = board
            .piece_at(rook_square)
            .is_some_and(|p| p.is(color, PieceKind::Rook));
        let path_clear = (1..distance).all(|step| {
            from.offset(0, direction * step)
                .is_some_and(|square| board.is_empty_at(square))
        });
        if is_own_rook && path_clear {
            out.push(rook_square);
        }
    }
}

/// Final king and rook squares for castling with the rook on `rook_square`.
pub fn castle_destinations(king_from: Square, rook_square: Square) -> Option<(Square, Square)> {
    let direction: i8 = if rook_square.col() > king_from.col() { 1 } else { -1 };
    let king_to = king_from.offset(0, 2 * direction)?;
    let rook_to = king_from.offset(0, direction)?;
    Some((king_to, rook_to))
}
