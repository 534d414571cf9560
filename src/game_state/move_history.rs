//! Linear undo/redo list of applied moves.
//!
//! `applied` counts the moves currently reflected on the board. A new move
//! made while `applied < len` discards the redo tail first.

use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
    applied: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the last applied move, `None` at the initial position.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    #[inline]
    pub fn is_at_head(&self) -> bool {
        self.applied == self.moves.len()
    }

    /// The last applied move.
    pub fn current(&self) -> Option<&Move> {
        self.current_index().map(|i| &self.moves[i])
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.truncate(self.applied);
        self.moves.push(mv);
        self.applied = self.moves.len();
    }

    /// Move to undo next, without changing the cursor.
    pub fn peek_back(&self) -> Option<&Move> {
        self.current()
    }

    /// Move to redo next, without changing the cursor.
    pub fn peek_forward(&self) -> Option<&Move> {
        self.moves.get(self.applied)
    }

    pub fn step_back(&mut self) {
        self.applied = self.applied.saturating_sub(1);
    }

    pub fn step_forward(&mut self) {
        if self.applied < self.moves.len() {
            self.applied += 1;
        }
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.applied = 0;
    }
}
