//! Crate root module declarations for the Dynamo Chess rules engine.
//!
//! Dynamo Chess is a 10x10 variant with a Missile piece (bishop plus knight),
//! three-square pawn advances and two extra win conditions. The modules below
//! cover the board model, per-piece move rules, legality filtering, the
//! `GameState` facade with history navigation, a random engine and text
//! utilities used by the `dynamo_chess` binary.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_history;
    pub mod win_conditions;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod missile_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod move_notation;
    pub mod render_game_state;
}

#[cfg(test)]
mod test_utils;
