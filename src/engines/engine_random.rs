//! Random-move engine.
//!
//! Picks uniformly among the legal moves of the side to move. Used for
//! self-play, soak tests of history navigation and as the weakest opponent.
//! A fixed seed makes a whole game reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: FastLegalMoveGenerator,
    seed: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: FastLegalMoveGenerator,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Dynamo Random"
    }

    /// Restarts the random sequence so a replayed game picks the same moves.
    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        if let Some(outcome) = game_state.final_outcome() {
            return Err(ChessError::GameOver(outcome.message()));
        }

        let legal_moves = self
            .move_generator
            .generate_legal_moves(game_state.board(), game_state.current_player());

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMoves)?;
        trace!(from = %picked.record.from, to = %picked.record.to, "random move picked");

        out.best_move = Some((picked.record.from, picked.record.to));
        Ok(out)
    }
}
