//! Human-readable move text for history panels and game records.

use crate::game_state::chess_types::{Move, MoveKind, PieceKind};

/// Short notation: `"e5"` for a quiet move, `"xe5"` for a piece capture,
/// `"dxe5"` for a pawn capture and `"O-O"`/`"O-O-O"` for castling. A
/// promotion gets a `"=M"` suffix.
pub fn short_notation(mv: &Move) -> String {
    if let MoveKind::Castle { rook_from, .. } = mv.kind {
        return if rook_from.col() > mv.from.col() {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        };
    }

    let mut text = if mv.moved_piece.kind == PieceKind::Pawn && mv.from.col() != mv.to.col() {
        format!("{}x{}", mv.from.file_char(), mv.to)
    } else if mv.is_capture() {
        format!("x{}", mv.to)
    } else {
        mv.to.to_string()
    };
    if mv.promoted {
        text.push_str("=M");
    }
    text
}

/// History panel line, for example `"3. Knight b1→c3"`. `index` is zero-based.
pub fn history_line(index: usize, mv: &Move) -> String {
    format!("{}. {} {}→{}", index + 1, mv.moved_piece.name(), mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece};
    use crate::move_generation::legal_move_apply::plan_move;
    use crate::test_utils::{board_with, sq};

    #[test]
    fn quiet_moves_name_the_target_square() {
        let board = Board::initial_setup();
        let push = plan_move(&board, sq(8, 4), sq(5, 4)).expect("pawn push");
        assert_eq!(short_notation(&push), "e5");

        let knight = plan_move(&board, sq(9, 1), sq(7, 2)).expect("knight jump");
        assert_eq!(short_notation(&knight), "c3");
        assert_eq!(history_line(2, &knight), "3. Knight b1→c3");
    }

    #[test]
    fn captures_are_marked() {
        let board = board_with(&[
            ((5, 4), Color::White, PieceKind::Pawn),
            ((4, 3), Color::Black, PieceKind::Knight),
            ((7, 3), Color::White, PieceKind::Rook),
        ]);
        let pawn = plan_move(&board, sq(5, 4), sq(4, 3)).expect("pawn capture");
        assert_eq!(short_notation(&pawn), "exd6");

        let rook = plan_move(&board, sq(7, 3), sq(4, 3)).expect("rook capture");
        assert_eq!(short_notation(&rook), "xd6");
    }

    #[test]
    fn en_passant_reads_as_a_pawn_capture() {
        let mut board = board_with(&[((5, 4), Color::Black, PieceKind::Pawn)]);
        board.set(
            sq(5, 5),
            Some(Piece::new(Color::White, PieceKind::Pawn).with_en_passant(true)),
        );
        let mv = plan_move(&board, sq(5, 4), sq(6, 5)).expect("en passant");
        assert_eq!(short_notation(&mv), "exf4");
    }

    #[test]
    fn promotion_and_castling_have_their_own_forms() {
        let board = board_with(&[
            ((1, 0), Color::White, PieceKind::Pawn),
            ((9, 4), Color::White, PieceKind::King),
            ((9, 0), Color::White, PieceKind::Rook),
            ((9, 7), Color::White, PieceKind::Rook),
        ]);
        let promotion = plan_move(&board, sq(1, 0), sq(0, 0)).expect("promotion");
        assert_eq!(short_notation(&promotion), "a10=M");

        let short = plan_move(&board, sq(9, 4), sq(9, 7)).expect("castle");
        assert_eq!(short_notation(&short), "O-O");
        let long = plan_move(&board, sq(9, 4), sq(9, 0)).expect("castle");
        assert_eq!(short_notation(&long), "O-O-O");

        let black = board_with(&[
            ((0, 5), Color::Black, PieceKind::King),
            ((0, 8), Color::Black, PieceKind::Rook),
            ((0, 1), Color::Black, PieceKind::Rook),
        ]);
        let kingside = plan_move(&black, sq(0, 5), sq(0, 8)).expect("castle");
        assert_eq!(short_notation(&kingside), "O-O");
        let queenside = plan_move(&black, sq(0, 5), sq(0, 1)).expect("castle");
        assert_eq!(short_notation(&queenside), "O-O-O");
    }
}
