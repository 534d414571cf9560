use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::{sliding_moves, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    sliding_moves(board, from, color, &DIAGONAL_DIRECTIONS, out);
}
