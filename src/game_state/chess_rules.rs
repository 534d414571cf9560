//! Dynamo Chess rule constants.
//!
//! Back-rank layouts, pawn starting rows, promotion rows and the Missile Mate
//! radius. Everything that differs from orthodox chess is collected here.

use crate::game_state::chess_types::{Color, PieceKind, BOARD_SIZE};

/// Black's back rank (row 0), file a to file j.
pub const BLACK_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Missile,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Missile,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// White's back rank (row 9). King and Queen are swapped relative to Black.
pub const WHITE_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Missile,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Missile,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Longest first advance a pawn may make from a starting row.
pub const MAX_PAWN_ADVANCE: u8 = 3;

/// Missile Mate fires when the last Missile is this close (taxicab) to a cornered king.
pub const MISSILE_MATE_DISTANCE: u8 = 2;

pub const PROMOTION_KIND: PieceKind = PieceKind::Missile;

#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => (BOARD_SIZE - 1) as u8,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_row(color: Color) -> u8 {
    match color {
        Color::White => (BOARD_SIZE - 2) as u8,
        Color::Black => 1,
    }
}

pub const fn back_rank_layout(color: Color) -> [PieceKind; BOARD_SIZE] {
    match color {
        Color::White => WHITE_BACK_RANK,
        Color::Black => BLACK_BACK_RANK,
    }
}

/// Rows from which a pawn may still make a 2- or 3-square advance: its own
/// pawn row and the row in front of it.
#[inline]
pub fn is_pawn_starting_row(color: Color, row: u8) -> bool {
    match color {
        Color::White => row == (BOARD_SIZE - 2) as u8 || row == (BOARD_SIZE - 3) as u8,
        Color::Black => row == 1 || row == 2,
    }
}

#[inline]
pub fn is_promotion_row(row: u8) -> bool {
    row == 0 || row as usize == BOARD_SIZE - 1
}

pub const PROMOTION_STATUS: &str = "Pawn promoted to Missile!";
pub const BROWSING_HISTORY_STATUS: &str = "Viewing past move.";
pub const RETURN_TO_PRESENT_STATUS: &str = "Return to present to make a new move.";

pub fn turn_status(color: Color) -> String {
    format!("{color}'s turn")
}
