use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub record: Move,
    pub board_after: Board,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move of `side` on `board`.
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove>;
}
