//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank, rank 10) is printed first, so White sits at the
//! bottom as on a physical board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, BOARD_SIZE};
use crate::game_state::game_state::GameState;

fn file_header() -> String {
    let files: Vec<String> = (0..BOARD_SIZE as u8)
        .map(|col| char::from(b'a' + col).to_string())
        .collect();
    format!("   {}", files.join(" "))
}

/// Render the board with file letters and rank numbers on every edge.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(&file_header());
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        out.push_str(&format!("{rank:>2} "));
        let cells: Vec<String> = board
            .row(row)
            .iter()
            .map(|cell| cell.map_or('·', |piece| piece.symbol()).to_string())
            .collect();
        out.push_str(&cells.join(" "));
        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(&file_header());
    out
}

/// Board plus the status line and any selection, as shown by the CLI.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(game_state.board());
    out.push('\n');
    out.push_str(game_state.status());
    if let Some(selected) = game_state.selected() {
        let targets: Vec<String> = game_state
            .possible_moves()
            .iter()
            .map(Square::to_string)
            .collect();
        out.push_str(&format!("\n{selected}: {}", targets.join(" ")));
    }
    out
}
