//! The Missile: bishop slides plus knight jumps.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::knight_moves::knight_moves;

#[inline]
pub fn missile_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    bishop_moves(board, from, color, out);
    knight_moves(board, from, color, out);
}
