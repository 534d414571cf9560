//! 10x10 mailbox board.
//!
//! The grid is a plain array of `Option<Piece>`, so `clone()` is a cheap
//! independent copy that the legality filter can mutate speculatively.

use std::ops::Index;

use crate::game_state::chess_rules::{back_rank_layout, back_rank_row, pawn_row};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting position: pawns on rows 1 and 8, back ranks on rows 0 and 9.
    pub fn initial_setup() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let layout = back_rank_layout(color);
            for col in 0..BOARD_SIZE {
                board.squares[pawn_row(color) as usize][col] =
                    Some(Piece::new(color, PieceKind::Pawn));
                board.squares[back_rank_row(color) as usize][col] =
                    Some(Piece::new(color, layout[col]));
            }
        }
        board
    }

    #[inline]
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Removes and returns the occupant of `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find(&self, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.is(color, kind))
            .map(|(square, _)| square)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find(color, PieceKind::King).next()
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.find(color, kind).count()
    }

    /// One rank of the grid, row 0 first.
    #[inline]
    pub fn row(&self, row: usize) -> &[Option<Piece>; BOARD_SIZE] {
        &self.squares[row]
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.row() as usize][square.col() as usize]
    }
}
