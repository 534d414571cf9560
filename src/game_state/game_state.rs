//! The game engine facade consumed by front ends.
//!
//! `GameState` owns the board, the side to move, the move history with its
//! cursor, the status line and the current selection. Front ends feed it
//! taps or from/to pairs and read back the board and status. All mutation goes
//! through `&mut self`, so callers serialize moves and history traversal.

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    turn_status, BROWSING_HISTORY_STATUS, PROMOTION_STATUS, RETURN_TO_PRESENT_STATUS,
};
use crate::game_state::chess_types::*;
use crate::game_state::move_history::MoveHistory;
use crate::game_state::win_conditions::detect_outcome;
use crate::move_generation::legal_move_apply::{apply_move, plan_move, revert_move};
use crate::move_generation::legal_move_checks::{attackers_to_square, is_king_in_check};
use crate::move_generation::legal_move_generator::{is_legal_move, legal_moves_from};

/// Result of selecting a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected: bool,
    pub legal_moves: Vec<Square>,
}

/// Result of a move attempt or a tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAttempt {
    pub applied: bool,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct GameState {
    initial_board: Board,
    initial_player: Color,
    board: Board,
    current_player: Color,
    history: MoveHistory,
    status: String,
    selected: Option<Square>,
    possible_moves: Vec<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_position(Board::initial_setup(), Color::White)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        Self {
            initial_board: board.clone(),
            initial_player: to_move,
            board,
            current_player: to_move,
            history: MoveHistory::new(),
            status: turn_status(to_move),
            selected: None,
            possible_moves: Vec::new(),
        }
    }

    /// Back to the starting position of this game, history discarded.
    pub fn reset(&mut self) {
        debug!("game reset");
        *self = Self::from_position(self.initial_board.clone(), self.initial_player);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position this game started from.
    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        self.history.moves()
    }

    /// Index of the move shown on the board; `None` before the first move.
    #[inline]
    pub fn current_move_index(&self) -> Option<usize> {
        self.history.current_index()
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn possible_moves(&self) -> &[Square] {
        &self.possible_moves
    }

    #[inline]
    pub fn is_at_present(&self) -> bool {
        self.history.is_at_head()
    }

    /// Outcome of the position currently shown.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.history.current().and_then(|mv| mv.outcome)
    }

    /// Outcome of the game as played so far, regardless of browsing.
    pub fn final_outcome(&self) -> Option<GameOutcome> {
        self.history.moves().last().and_then(|mv| mv.outcome)
    }

    /// True when `square` holds a king of either colour that is attacked.
    pub fn is_square_in_check(&self, square: Square) -> bool {
        match self.board.piece_at(square) {
            Some(piece) if piece.kind == PieceKind::King => is_king_in_check(&self.board, piece.color),
            _ => false,
        }
    }

    /// Legal destinations of the piece on `square`, whoever's turn it is.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves_from(&self.board, square)
    }

    pub fn select(&mut self, square: Square) -> Selection {
        let not_selected = Selection {
            selected: false,
            legal_moves: Vec::new(),
        };

        if !self.is_at_present() {
            self.clear_selection();
            self.status = RETURN_TO_PRESENT_STATUS.to_owned();
            return not_selected;
        }
        if let Some(outcome) = self.final_outcome() {
            self.clear_selection();
            self.status = outcome.message();
            return not_selected;
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.current_player => {
                let legal_moves = legal_moves_from(&self.board, square);
                self.selected = Some(square);
                self.possible_moves = legal_moves.clone();
                self.status = format!("Selected: {}", piece.name());
                debug!(%square, moves = legal_moves.len(), "piece selected");
                Selection {
                    selected: true,
                    legal_moves,
                }
            }
            _ => {
                self.clear_selection();
                not_selected
            }
        }
    }

    /// Validates and plays `from -> to` for the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveAttempt {
        let result = self.try_move(from, to);
        self.clear_selection();
        match result {
            Ok(()) => MoveAttempt {
                applied: true,
                status: self.status.clone(),
            },
            Err(err) => {
                debug!(%from, %to, error = %err, "move rejected");
                match err {
                    ChessError::NotAtPresent => {
                        self.status = RETURN_TO_PRESENT_STATUS.to_owned();
                    }
                    ChessError::GameOver(message) => self.status = message,
                    _ => {}
                }
                MoveAttempt {
                    applied: false,
                    status: self.status.clone(),
                }
            }
        }
    }

    /// Board tap: plays the selected piece onto the tapped square when that is
    /// one of its legal moves, otherwise selects an own piece.
    pub fn tap(&mut self, square: Square) -> MoveAttempt {
        if !self.is_at_present() {
            self.clear_selection();
            self.status = RETURN_TO_PRESENT_STATUS.to_owned();
            return self.rejected();
        }

        // a selected king's castling target is its own rook, so try the move first
        if let Some(from) = self.selected {
            if self.possible_moves.contains(&square) {
                return self.attempt_move(from, square);
            }
        }

        let own_piece = self
            .board
            .piece_at(square)
            .is_some_and(|p| p.color == self.current_player);
        if own_piece {
            self.select(square);
        } else {
            self.clear_selection();
        }
        self.rejected()
    }

    /// Tap with raw coordinates; off-board taps only clear the selection.
    pub fn tap_at(&mut self, row: i32, col: i32) -> MoveAttempt {
        match Square::from_coords(row, col) {
            Some(square) => self.tap(square),
            None => {
                self.clear_selection();
                self.rejected()
            }
        }
    }

    pub fn go_to_previous_move(&mut self) -> &Self {
        self.step_back();
        self
    }

    pub fn go_to_next_move(&mut self) -> &Self {
        self.step_forward();
        self
    }

    /// Shows the position after move `index`. Out-of-range indices are ignored.
    pub fn go_to_move(&mut self, index: usize) -> &Self {
        if index >= self.history.len() {
            debug!(index, len = self.history.len(), "history index out of range");
            return self;
        }
        loop {
            let stepped = match self.current_move_index() {
                Some(current) if current == index => break,
                Some(current) if current > index => self.step_back(),
                _ => self.step_forward(),
            };
            if !stepped {
                break;
            }
        }
        self
    }

    /// Shows the position before the first move.
    pub fn go_to_start(&mut self) -> &Self {
        while self.step_back() {}
        self
    }

    pub fn go_to_last_move(&mut self) -> &Self {
        while self.step_forward() {}
        self
    }

    fn try_move(&mut self, from: Square, to: Square) -> ChessResult<()> {
        if !self.is_at_present() {
            return Err(ChessError::NotAtPresent);
        }
        if let Some(outcome) = self.final_outcome() {
            return Err(ChessError::GameOver(outcome.message()));
        }

        let piece = self.board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        if piece.color != self.current_player {
            return Err(ChessError::NotYourPiece {
                square: from,
                owner: piece.color,
            });
        }
        if !is_legal_move(&self.board, from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let mut mv = plan_move(&self.board, from, to)?;
        let mut next = self.board.clone();
        apply_move(&mut next, &mv)?;
        mv.outcome = detect_outcome(&next, self.current_player);

        debug!(
            player = %self.current_player,
            piece = mv.moved_piece.name(),
            %from,
            %to,
            capture = mv.is_capture(),
            promoted = mv.promoted,
            "move applied"
        );
        if let Some(outcome) = mv.outcome {
            info!(winner = %outcome.winner, reason = ?outcome.reason, "game decided");
        }
        let checkers = checking_pieces(&next, self.current_player.opposite());
        if !checkers.is_empty() {
            debug!(side = %self.current_player.opposite(), ?checkers, "king in check");
        }

        self.board = next;
        self.history.push(mv);
        self.current_player = self.current_player.opposite();
        self.status = self.live_status();
        Ok(())
    }

    /// Status for the head of the history: promotion, then result, then turn.
    fn live_status(&self) -> String {
        match self.history.moves().last() {
            Some(last) if last.promoted => PROMOTION_STATUS.to_owned(),
            Some(last) => last
                .outcome
                .map(|outcome| outcome.message())
                .unwrap_or_else(|| turn_status(self.current_player)),
            None => turn_status(self.current_player),
        }
    }

    fn step_back(&mut self) -> bool {
        let Some(mv) = self.history.peek_back() else {
            return false;
        };
        if let Err(err) = revert_move(&mut self.board, mv) {
            warn!(error = %err, "could not step back through history");
            return false;
        }
        self.history.step_back();
        self.current_player = self.current_player.opposite();
        self.clear_selection();
        self.status = BROWSING_HISTORY_STATUS.to_owned();
        true
    }

    fn step_forward(&mut self) -> bool {
        let Some(mv) = self.history.peek_forward() else {
            return false;
        };
        if let Err(err) = apply_move(&mut self.board, mv) {
            warn!(error = %err, "could not step forward through history");
            return false;
        }
        self.history.step_forward();
        self.current_player = self.current_player.opposite();
        self.clear_selection();
        self.status = if self.is_at_present() {
            self.live_status()
        } else {
            BROWSING_HISTORY_STATUS.to_owned()
        };
        true
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    fn rejected(&self) -> MoveAttempt {
        MoveAttempt {
            applied: false,
            status: self.status.clone(),
        }
    }
}

/// Enemy pieces attacking the king of `color`, empty when it is not in check.
pub fn checking_pieces(board: &Board, color: Color) -> Vec<(Square, PieceKind)> {
    board
        .king_square(color)
        .map(|king| attackers_to_square(board, king, color.opposite()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_to_copy;
    use crate::test_utils::{board_with, sq};

    fn play(game: &mut GameState, from: (u8, u8), to: (u8, u8)) {
        let attempt = game.attempt_move(sq(from.0, from.1), sq(to.0, to.1));
        assert!(attempt.applied, "{from:?} -> {to:?} rejected: {}", attempt.status);
    }

    fn replay(game: &GameState) -> Board {
        let mut board = game.initial_board().clone();
        let applied = game.current_move_index().map_or(0, |i| i + 1);
        for mv in &game.move_history()[..applied] {
            apply_move(&mut board, mv).expect("history should replay");
        }
        board
    }

    /// Deterministic pseudo-random game; returns the number of moves played.
    fn scripted_game(game: &mut GameState, plies: usize) -> usize {
        let mut played = 0;
        for ply in 0..plies {
            if game.final_outcome().is_some() {
                break;
            }
            let side = game.current_player();
            let candidates: Vec<(Square, Square)> = game
                .board()
                .pieces_of(side)
                .flat_map(|(from, _)| {
                    game.legal_moves(from).into_iter().map(move |to| (from, to))
                })
                .collect();
            if candidates.is_empty() {
                break;
            }
            let (from, to) = candidates[(ply * 7 + 3) % candidates.len()];
            assert!(game.attempt_move(from, to).applied);
            played += 1;
        }
        played
    }

    #[test]
    fn new_game_starts_with_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.status(), "White's turn");
        assert_eq!(game.current_move_index(), None);
        assert!(game.move_history().is_empty());
        assert!(game.is_at_present());
    }

    #[test]
    fn selecting_own_piece_lists_its_moves() {
        let mut game = GameState::new_game();
        let selection = game.select(sq(8, 0));
        assert!(selection.selected);
        assert_eq!(selection.legal_moves, vec![sq(7, 0), sq(6, 0), sq(5, 0)]);
        assert_eq!(game.status(), "Selected: Pawn");
        assert_eq!(game.selected(), Some(sq(8, 0)));

        let enemy = game.select(sq(1, 0));
        assert!(!enemy.selected);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn applied_move_updates_player_history_and_status() {
        let mut game = GameState::new_game();
        let attempt = game.attempt_move(sq(8, 4), sq(5, 4));
        assert!(attempt.applied);
        assert_eq!(attempt.status, "Black's turn");
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.current_move_index(), Some(0));

        let mv = &game.move_history()[0];
        assert_eq!(mv.moved_piece, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.captured_piece, None);
        assert!(game.board().is_empty_at(sq(8, 4)));
    }

    #[test]
    fn invalid_moves_are_ignored_without_mutation() {
        let mut game = GameState::new_game();
        let before = game.board().clone();

        assert!(!game.attempt_move(sq(8, 0), sq(4, 0)).applied);
        assert!(!game.attempt_move(sq(1, 0), sq(2, 0)).applied);
        assert!(!game.attempt_move(sq(5, 5), sq(4, 5)).applied);

        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), "White's turn");
        assert_eq!(game.current_player(), Color::White);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn tap_selects_then_moves() {
        let mut game = GameState::new_game();
        assert!(!game.tap(sq(8, 2)).applied);
        assert_eq!(game.possible_moves().len(), 3);

        let moved = game.tap(sq(6, 2));
        assert!(moved.applied);
        assert_eq!(moved.status, "Black's turn");

        game.tap(sq(1, 2));
        let miss = game.tap(sq(5, 5));
        assert!(!miss.applied);
        assert_eq!(game.selected(), None);

        let off_board = game.tap_at(12, -1);
        assert!(!off_board.applied);
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn tapping_own_rook_with_king_selected_castles() {
        let board = board_with(&[
            ((9, 4), Color::White, PieceKind::King),
            ((9, 0), Color::White, PieceKind::Rook),
            ((7, 7), Color::White, PieceKind::Missile),
            ((0, 9), Color::Black, PieceKind::King),
            ((2, 2), Color::Black, PieceKind::Missile),
        ]);
        let mut game = GameState::from_position(board, Color::White);
        game.tap(sq(9, 4));
        assert!(game.possible_moves().contains(&sq(9, 0)));

        let castled = game.tap(sq(9, 0));
        assert!(castled.applied);
        assert_eq!(game.board().piece_at(sq(9, 2)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.board().piece_at(sq(9, 3)).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(castled.status, "Black's turn");
    }

    #[test]
    fn moving_while_browsing_is_rejected() {
        let mut game = GameState::new_game();
        play(&mut game, (8, 4), (6, 4));
        play(&mut game, (1, 4), (3, 4));
        game.go_to_previous_move();
        assert_eq!(game.status(), "Viewing past move.");

        let before = game.board().clone();
        let attempt = game.attempt_move(sq(1, 4), sq(3, 4));
        assert!(!attempt.applied);
        assert_eq!(attempt.status, "Return to present to make a new move.");
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_history().len(), 2);

        assert!(!game.select(sq(1, 0)).selected);
        assert_eq!(game.status(), "Return to present to make a new move.");
    }

    #[test]
    fn first_move_can_be_undone_to_the_start() {
        let mut game = GameState::new_game();
        play(&mut game, (8, 4), (6, 4));
        game.go_to_previous_move();
        assert_eq!(game.current_move_index(), None);
        assert_eq!(game.board(), &Board::initial_setup());
        assert_eq!(game.current_player(), Color::White);

        game.go_to_next_move();
        assert_eq!(game.current_move_index(), Some(0));
        assert_eq!(game.status(), "Black's turn");
    }

    #[test]
    fn previous_then_next_restores_every_position() {
        let mut game = GameState::new_game();
        let played = scripted_game(&mut game, 30);
        assert!(played > 0);

        for index in 0..played {
            game.go_to_move(index);
            let before = game.board().clone();
            let player = game.current_player();
            game.go_to_previous_move();
            game.go_to_next_move();
            assert_eq!(game.board(), &before, "round trip at {index}");
            assert_eq!(game.current_player(), player);
        }
    }

    #[test]
    fn board_always_matches_replayed_history() {
        let mut game = GameState::new_game();
        let played = scripted_game(&mut game, 40);
        assert_eq!(game.board(), &replay(&game));

        game.go_to_start();
        assert_eq!(game.board(), &Board::initial_setup());
        for index in (0..played).rev().step_by(3) {
            game.go_to_move(index);
            assert_eq!(game.current_move_index(), Some(index));
            assert_eq!(game.board(), &replay(&game));
        }
        game.go_to_last_move();
        assert!(game.is_at_present());
        assert_eq!(game.board(), &replay(&game));
    }

    #[test]
    fn out_of_range_history_index_is_ignored() {
        let mut game = GameState::new_game();
        play(&mut game, (8, 4), (6, 4));
        game.go_to_move(5);
        assert_eq!(game.current_move_index(), Some(0));
    }

    #[test]
    fn en_passant_window_lasts_one_turn() {
        let mut game = GameState::new_game();
        play(&mut game, (8, 5), (5, 5));
        play(&mut game, (1, 0), (2, 0));
        play(&mut game, (5, 5), (4, 5));
        play(&mut game, (1, 4), (4, 4));
        // black pawn on (4,4) just advanced three squares beside the white pawn
        assert!(game.legal_moves(sq(4, 5)).contains(&sq(3, 4)));

        play(&mut game, (9, 1), (7, 2));
        play(&mut game, (2, 0), (3, 0));
        assert!(!game.legal_moves(sq(4, 5)).contains(&sq(3, 4)));
    }

    #[test]
    fn en_passant_capture_through_the_engine() {
        let mut game = GameState::new_game();
        play(&mut game, (8, 5), (5, 5));
        play(&mut game, (1, 0), (2, 0));
        play(&mut game, (5, 5), (4, 5));
        play(&mut game, (1, 4), (4, 4));
        play(&mut game, (4, 5), (3, 4));

        assert!(game.board().is_empty_at(sq(4, 4)));
        let mv = game.move_history().last().expect("move recorded");
        assert_eq!(mv.kind, MoveKind::EnPassant { captured_square: sq(4, 4) });
        assert_eq!(game.board(), &replay(&game));

        game.go_to_previous_move();
        assert_eq!(
            game.board().piece_at(sq(4, 4)),
            Some(Piece::new(Color::Black, PieceKind::Pawn).with_en_passant(true))
        );
    }

    #[test]
    fn promotion_replaces_pawn_with_missile() {
        let board = board_with(&[
            ((1, 2), Color::White, PieceKind::Pawn),
            ((9, 9), Color::White, PieceKind::King),
            ((5, 5), Color::White, PieceKind::Missile),
            ((0, 5), Color::Black, PieceKind::King),
            ((4, 0), Color::Black, PieceKind::Missile),
        ]);
        let mut game = GameState::from_position(board, Color::White);
        play(&mut game, (1, 2), (0, 2));

        assert_eq!(
            game.board().piece_at(sq(0, 2)),
            Some(Piece::new(Color::White, PieceKind::Missile))
        );
        assert_eq!(game.status(), "Pawn promoted to Missile!");
        assert_eq!(game.move_history()[0].moved_piece.kind, PieceKind::Pawn);

        game.go_to_previous_move();
        assert_eq!(game.board().piece_at(sq(1, 2)).map(|p| p.kind), Some(PieceKind::Pawn));
        game.go_to_next_move();
        assert_eq!(game.board().piece_at(sq(0, 2)).map(|p| p.kind), Some(PieceKind::Missile));
    }

    #[test]
    fn capturing_the_last_missile_ends_the_game() {
        let board = board_with(&[
            ((9, 4), Color::White, PieceKind::King),
            ((9, 3), Color::White, PieceKind::Missile),
            ((5, 0), Color::White, PieceKind::Rook),
            ((0, 5), Color::Black, PieceKind::King),
            ((5, 7), Color::Black, PieceKind::Missile),
        ]);
        let mut game = GameState::from_position(board, Color::White);
        play(&mut game, (5, 0), (5, 7));

        assert_eq!(game.status(), "White wins by capturing both Missiles!");
        assert_eq!(
            game.final_outcome(),
            Some(GameOutcome {
                winner: Color::White,
                reason: WinReason::MissilesCaptured,
            })
        );

        let after = game.attempt_move(sq(0, 5), sq(0, 4));
        assert!(!after.applied);
        assert_eq!(after.status, "White wins by capturing both Missiles!");
        assert!(!game.select(sq(0, 5)).selected);
    }

    #[test]
    fn missile_mate_on_cornered_king() {
        let board = board_with(&[
            ((0, 0), Color::Black, PieceKind::King),
            ((5, 5), Color::Black, PieceKind::Missile),
            ((6, 6), Color::Black, PieceKind::Missile),
            ((9, 0), Color::White, PieceKind::King),
            ((4, 4), Color::White, PieceKind::Missile),
        ]);
        let mut game = GameState::from_position(board, Color::White);
        play(&mut game, (4, 4), (1, 1));
        assert_eq!(game.status(), "White wins with Missile Mate!");
        assert_eq!(game.outcome().map(|o| o.reason), Some(WinReason::MissileMate));
    }

    #[test]
    fn check_highlighting_works_for_either_colour() {
        let board = board_with(&[
            ((9, 4), Color::White, PieceKind::King),
            ((0, 5), Color::Black, PieceKind::King),
            ((5, 4), Color::Black, PieceKind::Rook),
            ((3, 3), Color::White, PieceKind::Missile),
            ((7, 7), Color::Black, PieceKind::Missile),
        ]);
        let game = GameState::from_position(board, Color::Black);
        assert!(game.is_square_in_check(sq(9, 4)));
        assert!(!game.is_square_in_check(sq(0, 5)));
        assert!(!game.is_square_in_check(sq(5, 4)));
        assert!(!game.is_square_in_check(sq(4, 4)));
    }

    #[test]
    fn checking_move_is_reported_and_highlighted() {
        let board = board_with(&[
            ((9, 4), Color::White, PieceKind::King),
            ((5, 0), Color::White, PieceKind::Rook),
            ((7, 7), Color::White, PieceKind::Missile),
            ((0, 5), Color::Black, PieceKind::King),
            ((2, 2), Color::Black, PieceKind::Missile),
        ]);
        let mut game = GameState::from_position(board, Color::White);
        assert!(checking_pieces(game.board(), Color::Black).is_empty());

        play(&mut game, (5, 0), (5, 5));
        assert_eq!(
            checking_pieces(game.board(), Color::Black),
            vec![(sq(5, 5), PieceKind::Rook)]
        );
        assert!(game.is_square_in_check(sq(0, 5)));
        assert!(checking_pieces(game.board(), Color::White).is_empty());
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check() {
        let mut game = GameState::new_game();
        scripted_game(&mut game, 40);
        for (from, piece) in game.board().pieces().collect::<Vec<_>>() {
            for to in game.legal_moves(from) {
                let (_, next) =
                    apply_to_copy(game.board(), from, to).expect("legal move should apply");
                assert!(!is_king_in_check(&next, piece.color));
            }
        }
    }

    #[test]
    fn reset_restores_the_starting_position() {
        let mut game = GameState::new_game();
        scripted_game(&mut game, 6);
        game.reset();
        assert_eq!(game.board(), &Board::initial_setup());
        assert!(game.move_history().is_empty());
        assert_eq!(game.status(), "White's turn");
        assert_eq!(game.current_player(), Color::White);
    }
}
