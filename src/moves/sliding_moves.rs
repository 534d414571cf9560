//! Shared ray walker for Rook, Bishop, Queen and the Missile's diagonal part.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walks each direction from `from` until the edge or the first occupied
/// square. An enemy blocker is included, an own blocker is not.
pub fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Single jumps to each offset, landing on empty or enemy squares.
pub fn leaper_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::test_utils::{board_with, sq};

    #[test]
    fn ray_stops_before_own_piece_and_on_enemy_piece() {
        let board = board_with(&[
            ((5, 5), Color::White, PieceKind::Rook),
            ((5, 8), Color::White, PieceKind::Pawn),
            ((2, 5), Color::Black, PieceKind::Pawn),
        ]);
        let mut out = Vec::new();
        sliding_moves(&board, sq(5, 5), Color::White, &[(0, 1), (-1, 0)], &mut out);
        assert_eq!(out, vec![sq(5, 6), sq(5, 7), sq(4, 5), sq(3, 5), sq(2, 5)]);
    }

    #[test]
    fn leaper_skips_off_board_and_own_squares() {
        let board = board_with(&[
            ((0, 0), Color::Black, PieceKind::Knight),
            ((1, 2), Color::Black, PieceKind::Pawn),
        ]);
        let mut out = Vec::new();
        leaper_moves(&board, sq(0, 0), Color::Black, &[(1, 2), (2, 1), (-1, 2)], &mut out);
        assert_eq!(out, vec![sq(2, 1)]);
    }
}
