//! Legality filter.
//!
//! Each pseudo-legal candidate is played on a cloned board and discarded if
//! the mover's king is attacked afterwards. Castling is also refused out of
//! check and across an attacked square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, MoveKind, Square};
use crate::move_generation::legal_move_apply::apply_to_copy;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        generate_for_side(board, side, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        generate_for_side(board, side, false)
    }
}

/// Legal destinations of the piece on `from`, in generation order.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Square> {
    legal_moves_with_boards(board, from, false)
        .into_iter()
        .map(|generated| generated.record.to)
        .collect()
}

pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    legal_moves_from(board, from).contains(&to)
}

pub fn has_legal_move(board: &Board, side: Color) -> bool {
    board
        .pieces_of(side)
        .any(|(from, _)| !legal_moves_from(board, from).is_empty())
}

fn generate_for_side(board: &Board, side: Color, annotate: bool) -> Vec<GeneratedMove> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(side) {
        legal.extend(legal_moves_with_boards(board, from, annotate));
    }
    legal
}

fn legal_moves_with_boards(board: &Board, from: Square, annotate: bool) -> Vec<GeneratedMove> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let color = piece.color;

    let mut legal = Vec::new();
    for to in pseudo_legal_moves(board, from) {
        let Ok((record, board_after)) = apply_to_copy(board, from, to) else {
            continue;
        };

        if let MoveKind::Castle { rook_to, .. } = record.kind {
            // rook_to is the square the king crosses
            if is_king_in_check(board, color) || is_square_attacked(board, rook_to, color.opposite()) {
                continue;
            }
        }

        if is_king_in_check(&board_after, color) {
            continue;
        }

        let annotations = if annotate {
            MoveAnnotations {
                gives_check: is_king_in_check(&board_after, color.opposite()),
            }
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedMove {
            record,
            board_after,
            annotations,
        });
    }
    legal
}
