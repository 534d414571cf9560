//! Algebraic square names for the 10x10 board.
//!
//! Files run `a`..`j` left to right, ranks `1`..`10` from White's side, so
//! `(9,0)` is `a1` and `(0,9)` is `j10`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, BOARD_SIZE};

/// Parse a square name such as `"e4"` or `"j10"`.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let invalid = || ChessError::InvalidSquare(name.to_owned());
    let trimmed = name.trim();
    let mut chars = trimmed.chars();

    let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }
    let col = file as u32 - 'a' as u32;

    let rank: u8 = chars.as_str().parse().map_err(|_| invalid())?;
    if rank == 0 || rank as usize > BOARD_SIZE {
        return Err(invalid());
    }

    let col = u8::try_from(col).map_err(|_| invalid())?;
    Square::new(BOARD_SIZE as u8 - rank, col).ok_or_else(invalid)
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
