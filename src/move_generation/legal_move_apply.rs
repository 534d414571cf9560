//! Move planning, application and reversal on a bare board.
//!
//! `plan_move` inspects a board and builds the full [`Move`] record for a
//! from/to pair: en-passant and castling detection, flag expiry, the pawn's
//! new en-passant flag and promotion. `apply_move` and `revert_move` then
//! replay that record forwards or backwards without re-deriving anything, which
//! is what keeps history navigation exact.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{is_promotion_row, PROMOTION_KIND};
use crate::game_state::chess_types::*;
use crate::moves::king_moves::castle_destinations;

pub fn plan_move(board: &Board, from: Square, to: Square) -> ChessResult<Move> {
    let moved_piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    let color = moved_piece.color;
    let target = board.piece_at(to);

    let cleared_en_passant: Vec<Square> = board
        .pieces_of(color)
        .filter(|(_, piece)| piece.en_passant_eligible)
        .map(|(square, _)| square)
        .collect();

    let (kind, captured_piece) = match (moved_piece.kind, target) {
        (PieceKind::King, Some(rook)) if rook.is(color, PieceKind::Rook) => {
            let (king_to, rook_to) =
                castle_destinations(from, to).ok_or(ChessError::IllegalMove { from, to })?;
            let kind = MoveKind::Castle {
                king_to,
                rook_from: to,
                rook_to,
            };
            (kind, None)
        }
        (PieceKind::Pawn, None) if from.col() != to.col() => {
            let captured_square = Square::new(from.row(), to.col())
                .ok_or(ChessError::IllegalMove { from, to })?;
            let captured = board
                .piece_at(captured_square)
                .ok_or(ChessError::IllegalMove { from, to })?;
            (MoveKind::EnPassant { captured_square }, Some(captured))
        }
        (_, Some(occupant)) if occupant.color == color => {
            return Err(ChessError::IllegalMove { from, to });
        }
        (_, occupant) => (MoveKind::Normal, occupant),
    };

    let mut placed_piece = moved_piece;
    let mut promoted = false;
    if moved_piece.kind == PieceKind::Pawn {
        let distance = from.row().abs_diff(to.row());
        placed_piece = moved_piece.with_en_passant(distance == 2 || distance == 3);
        if is_promotion_row(to.row()) {
            placed_piece = Piece::new(color, PROMOTION_KIND);
            promoted = true;
        }
    }

    Ok(Move {
        from,
        to,
        moved_piece,
        captured_piece,
        placed_piece,
        kind,
        cleared_en_passant,
        promoted,
        outcome: None,
    })
}

/// Plays a move record forwards. The board is left untouched on error.
pub fn apply_move(board: &mut Board, mv: &Move) -> ChessResult<()> {
    let corrupt = || ChessError::CorruptHistory {
        from: mv.from,
        to: mv.to,
    };
    if board.piece_at(mv.from) != Some(mv.moved_piece) {
        return Err(corrupt());
    }
    if let MoveKind::Castle { rook_from, .. } = mv.kind {
        let rook_present = board
            .piece_at(rook_from)
            .is_some_and(|p| p.is(mv.moved_piece.color, PieceKind::Rook));
        if !rook_present {
            return Err(corrupt());
        }
    }

    for &square in &mv.cleared_en_passant {
        if let Some(piece) = board.piece_at(square) {
            board.set(square, Some(piece.with_en_passant(false)));
        }
    }

    board.take(mv.from);
    match mv.kind {
        MoveKind::Normal => board.set(mv.to, Some(mv.placed_piece)),
        MoveKind::EnPassant { captured_square } => {
            board.take(captured_square);
            board.set(mv.to, Some(mv.placed_piece));
        }
        MoveKind::Castle {
            king_to,
            rook_from,
            rook_to,
        } => {
            let rook = board.take(rook_from);
            board.set(king_to, Some(mv.placed_piece));
            board.set(rook_to, rook);
        }
    }
    Ok(())
}

/// Undoes a move record previously applied to this board.
pub fn revert_move(board: &mut Board, mv: &Move) -> ChessResult<()> {
    if board.piece_at(mv.landing_square()) != Some(mv.placed_piece) {
        return Err(ChessError::CorruptHistory {
            from: mv.from,
            to: mv.to,
        });
    }

    match mv.kind {
        MoveKind::Normal => board.set(mv.to, mv.captured_piece),
        MoveKind::EnPassant { captured_square } => {
            board.set(mv.to, None);
            board.set(captured_square, mv.captured_piece);
        }
        MoveKind::Castle {
            king_to,
            rook_from,
            rook_to,
        } => {
            let rook = board.take(rook_to);
            board.set(king_to, None);
            board.set(rook_from, rook);
        }
    }
    board.set(mv.from, Some(mv.moved_piece));

    for &square in &mv.cleared_en_passant {
        if let Some(piece) = board.piece_at(square) {
            board.set(square, Some(piece.with_en_passant(true)));
        }
    }
    Ok(())
}

/// Plans `from -> to` and returns the record together with the resulting board.
pub fn apply_to_copy(board: &Board, from: Square, to: Square) -> ChessResult<(Move, Board)> {
    let mv = plan_move(board, from, to)?;
    let mut next = board.clone();
    apply_move(&mut next, &mv)?;
    Ok((mv, next))
}
