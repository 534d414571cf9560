//! Plain-text game record.
//!
//! Bracketed headers followed by numbered move pairs in short notation, in
//! the familiar PGN layout. The record is for reading and archiving only;
//! there is no parser for it.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_types::{Color, GameOutcome};
use crate::game_state::game_state::GameState;
use crate::utils::move_notation::short_notation;

pub fn result_token(outcome: Option<GameOutcome>) -> &'static str {
    match outcome.map(|outcome| outcome.winner) {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

/// Record of the whole game as played, dated today.
pub fn write_game_record(game_state: &GameState) -> String {
    write_game_record_on(game_state, Local::now().date_naive())
}

pub fn write_game_record_on(game_state: &GameState, date: NaiveDate) -> String {
    let outcome = game_state.final_outcome();

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Dynamo Chess Game".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("White", "White".to_owned());
    headers.insert("Black", "Black".to_owned());
    headers.insert("Result", result_token(outcome).to_owned());
    if let Some(outcome) = outcome {
        headers.insert("Termination", outcome.message());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    // a set-up position may hand the first move to Black
    let black_first = first_mover(game_state) == Some(Color::Black);

    let mut parts = Vec::with_capacity(game_state.move_history().len() + 1);
    for (ply, mv) in game_state.move_history().iter().enumerate() {
        let ply = if black_first { ply + 1 } else { ply };
        let text = short_notation(mv);
        if ply % 2 == 0 {
            parts.push(format!("{}. {text}", ply / 2 + 1));
        } else if parts.is_empty() {
            parts.push(format!("{}... {text}", ply / 2 + 1));
        } else {
            parts.push(text);
        }
    }
    parts.push(result_token(outcome).to_owned());

    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

fn first_mover(game_state: &GameState) -> Option<Color> {
    game_state.move_history().first().map(|mv| mv.moved_piece.color)
}
