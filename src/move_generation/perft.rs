//! Legal move tree node counting.
//!
//! Perft walks the raw move tree. Missile win conditions are not applied, so
//! decided positions keep expanding; the counts validate move generation, not
//! game flow.

use std::sync::Arc;
use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, MoveKind};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side) {
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut total);
    }
    total
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side);
    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mv, side.opposite(), depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::WorkerPanicked)?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    side_after: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.record.is_capture() {
            counts.captures += 1;
        }
        match mv.record.kind {
            MoveKind::EnPassant { .. } => counts.en_passant += 1,
            MoveKind::Castle { .. } => counts.castles += 1,
            MoveKind::Normal => {}
        }
        if mv.record.promoted {
            counts.promotions += 1;
        }
        if mv.annotations.gives_check {
            counts.checks += 1;
        }
        return;
    }

    for child in generator.generate_legal_moves(&mv.board_after, side_after) {
        perft_recurse(
            generator,
            &child,
            side_after.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}
