//! Position builders shared by unit tests.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("test square should be on the board")
}

pub fn board_with(placements: &[((u8, u8), Color, PieceKind)]) -> Board {
    let mut board = Board::empty();
    for &((row, col), color, kind) in placements {
        board.set(sq(row, col), Some(Piece::new(color, kind)));
    }
    board
}
