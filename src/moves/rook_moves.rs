use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::sliding_moves::{sliding_moves, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
