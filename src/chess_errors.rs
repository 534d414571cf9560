//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by fallible internals:
//! planning a move against a board, parsing algebraic squares, and engine move
//! selection. Player mistakes at the `GameState` surface are not errors; they
//! are turned into a rejected `MoveAttempt` carrying a status string.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The origin square of a move holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The origin square holds a piece of the side not to move.
    #[error("piece on {square} belongs to {owner}")]
    NotYourPiece { square: Square, owner: Color },

    /// The destination is not among the legal moves of the piece.
    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    /// A move was attempted while browsing an earlier position.
    #[error("cannot move while viewing a past position")]
    NotAtPresent,

    /// The game has already been decided.
    #[error("game is over: {0}")]
    GameOver(String),

    /// A square name could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A stored move record does not match the board it is replayed on.
    #[error("move record {from} to {to} does not match the board")]
    CorruptHistory { from: Square, to: Square },

    /// The side to move has no legal move.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A perft worker thread panicked.
    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessError>;
