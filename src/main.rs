use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dynamo_chess::chess_errors::ChessResult;
use dynamo_chess::engines::engine_random::RandomEngine;
use dynamo_chess::engines::engine_trait::Engine;
use dynamo_chess::game_state::chess_types::{Color, Square};
use dynamo_chess::game_state::game_state::GameState;
use dynamo_chess::move_generation::legal_move_generator::has_legal_move;
use dynamo_chess::utils::algebraic::algebraic_to_square;
use dynamo_chess::utils::game_record::write_game_record;
use dynamo_chess::utils::move_notation::history_line;
use dynamo_chess::utils::render_game_state::{render_board, render_game_state};

#[derive(Debug, Parser)]
#[command(name = "dynamo_chess", version, about = "Dynamo Chess: 10x10 chess with Missiles")]
struct Cli {
    /// Tracing filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively, reading commands from stdin.
    Play,
    /// Let two random engines play each other.
    Selfplay {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 400)]
        max_plies: usize,
    },
}

const HELP: &str = "\
commands:
  tap <sq>          select a piece or move the selected one (e.g. tap e2)
  move <from> <to>  play a move (e.g. move e2 e5)
  ai                let the random engine move for the side to play
  back | next       step through history
  goto <n>          show the position after move n (0 for the start)
  start | last      jump to the first or latest position
  history           list the moves played
  record            print the game record
  board             print the board
  reset             start a new game
  quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive()?,
        Command::Selfplay { seed, max_plies } => run_selfplay(seed, max_plies),
    }
    Ok(())
}

fn run_interactive() -> io::Result<()> {
    let mut game = GameState::new_game();
    let mut engine = RandomEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n{HELP}", render_game_state(&game))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        match (command, args) {
            ("quit" | "exit", _) => break,
            ("help", _) => writeln!(stdout, "{HELP}")?,
            ("board", _) => writeln!(stdout, "{}", render_game_state(&game))?,
            ("history", _) => {
                for (index, mv) in game.move_history().iter().enumerate() {
                    let marker = if Some(index) == game.current_move_index() { " <" } else { "" };
                    writeln!(stdout, "{}{marker}", history_line(index, mv))?;
                }
            }
            ("record", _) => write!(stdout, "{}", write_game_record(&game))?,
            ("reset", _) => {
                game.reset();
                engine.new_game();
                writeln!(stdout, "{}", render_game_state(&game))?;
            }
            ("tap", [square]) => match parse_square(square) {
                Ok(square) => {
                    game.tap(square);
                    writeln!(stdout, "{}", render_game_state(&game))?;
                }
                Err(err) => writeln!(stdout, "{err}")?,
            },
            ("move", [from, to]) => match (parse_square(from), parse_square(to)) {
                (Ok(from), Ok(to)) => {
                    let attempt = game.attempt_move(from, to);
                    if !attempt.applied {
                        writeln!(stdout, "move not played")?;
                    }
                    writeln!(stdout, "{}", render_game_state(&game))?;
                }
                (Err(err), _) | (_, Err(err)) => writeln!(stdout, "{err}")?,
            },
            ("ai", _) => {
                match engine.choose_move(&game) {
                    Ok(output) => {
                        if let Some((from, to)) = output.best_move {
                            game.attempt_move(from, to);
                        }
                    }
                    Err(err) => writeln!(stdout, "{err}")?,
                }
                writeln!(stdout, "{}", render_game_state(&game))?;
            }
            ("back", _) => writeln!(stdout, "{}", render_game_state(game.go_to_previous_move()))?,
            ("next", _) => writeln!(stdout, "{}", render_game_state(game.go_to_next_move()))?,
            ("start", _) => writeln!(stdout, "{}", render_game_state(game.go_to_start()))?,
            ("last", _) => writeln!(stdout, "{}", render_game_state(game.go_to_last_move()))?,
            ("goto", [n]) => match n.parse::<usize>() {
                Ok(0) => writeln!(stdout, "{}", render_game_state(game.go_to_start()))?,
                Ok(n) => writeln!(stdout, "{}", render_game_state(game.go_to_move(n - 1)))?,
                Err(_) => writeln!(stdout, "expected a move number")?,
            },
            _ => writeln!(stdout, "unknown command, try 'help'")?,
        }
        stdout.flush()?;
    }
    Ok(())
}

fn parse_square(name: &str) -> ChessResult<Square> {
    algebraic_to_square(name)
}

fn run_selfplay(seed: Option<u64>, max_plies: usize) {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, max_plies, "starting self-play");

    let mut game = GameState::new_game();
    let mut white = RandomEngine::with_seed(seed);
    let mut black = RandomEngine::with_seed(seed.wrapping_add(1));

    for _ in 0..max_plies {
        if game.final_outcome().is_some() {
            break;
        }
        if !has_legal_move(game.board(), game.current_player()) {
            info!(side = %game.current_player(), "no legal move, stopping");
            break;
        }
        let engine = match game.current_player() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let proposal = match engine.choose_move(&game) {
            Ok(output) => output.best_move,
            Err(err) => {
                warn!(error = %err, "engine could not move");
                break;
            }
        };
        let Some((from, to)) = proposal else {
            break;
        };
        if !game.attempt_move(from, to).applied {
            warn!(%from, %to, "engine proposed a move the game refused");
            break;
        }
    }

    println!("seed {seed}");
    println!("{}", render_board(game.board()));
    println!("{}", game.status());
    print!("{}", write_game_record(&game));
}
