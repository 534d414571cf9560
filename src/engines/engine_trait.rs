//! Engine abstraction used by self-play and computer opponents.
//!
//! An engine looks at a `GameState` and proposes one from/to pair for the side
//! to move. Applying the proposal is left to the caller, which runs it through
//! the same validation as a human move.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<(Square, Square)>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
