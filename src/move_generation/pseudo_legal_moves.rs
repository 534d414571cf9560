//! Per-piece dispatch for pseudo-legal destinations.
//!
//! Pseudo-legal moves obey piece movement rules but may leave the mover's own
//! king attacked; `legal_move_generator` filters those out.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::{king_moves, king_steps};
use crate::moves::knight_moves::knight_moves;
use crate::moves::missile_moves::missile_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// All candidate destinations for the piece on `from`, castling included.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);
    if let Some(piece) = board.piece_at(from) {
        generate_for_piece(board, from, piece, true, &mut out);
    }
    out
}

/// Candidate destinations without castling. Castling never captures, so
/// these are exactly the squares the piece threatens for check detection.
pub fn attack_targets(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    generate_for_piece(board, from, piece, false, out);
}

fn generate_for_piece(
    board: &Board,
    from: Square,
    piece: Piece,
    with_castling: bool,
    out: &mut Vec<Square>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, color, out),
        PieceKind::Rook => rook_moves(board, from, color, out),
        PieceKind::Knight => knight_moves(board, from, color, out),
        PieceKind::Bishop => bishop_moves(board, from, color, out),
        PieceKind::Queen => queen_moves(board, from, color, out),
        PieceKind::King if with_castling => king_moves(board, from, color, out),
        PieceKind::King => king_steps(board, from, color, out),
        PieceKind::Missile => missile_moves(board, from, color, out),
    }
}
