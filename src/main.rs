//! Command-line game between two move choosers.
//!
//! `cargo run --release -- --white human --black minimax --depth 4`
//!
//! Flags: `--white KIND`, `--black KIND` (`human`, `random`, `minimax`),
//! `--depth N` for minimax players, `--fen "..."` for the start position,
//! `--max-plies N` to cap the game length. Human players type long algebraic
//! moves (`e2e4`, `e7e8q`) on stdin.

use std::io::{self, BufReader, Write};

use tracing_subscriber::EnvFilter;

use chess_core::engines::engine_human::{HumanEngine, LineMoveSource};
use chess_core::engines::engine_minimax::MinimaxEngine;
use chess_core::engines::engine_random::RandomEngine;
use chess_core::engines::engine_trait::Engine;
use chess_core::errors::{ChessError, ChessResult};
use chess_core::game_state::chess_types::Color;
use chess_core::game_state::game_state::GameState;
use chess_core::move_generation::game_status::GameStatus;
use chess_core::search::minimax::SearchConfig;
use chess_core::utils::engine_match_harness::{Game, TurnOutcome};
use chess_core::utils::render_game_state::render_game_state;

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> ChessResult<T> {
    match flag_value(args, name) {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| ChessError::InvalidOption {
            name: name.trim_start_matches('-').to_owned(),
            value: text.to_owned(),
        }),
    }
}

fn build_engine(kind: &str, depth: u8) -> ChessResult<Box<dyn Engine>> {
    match kind.to_ascii_lowercase().as_str() {
        "human" => Ok(Box::new(HumanEngine::new(LineMoveSource::new(BufReader::new(
            io::stdin(),
        ))))),
        "random" => Ok(Box::new(RandomEngine::new())),
        "minimax" => Ok(Box::new(MinimaxEngine::new(depth))),
        _ => Err(ChessError::InvalidOption {
            name: "player".to_owned(),
            value: kind.to_owned(),
        }),
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let depth: u8 = parse_flag(&args, "--depth", SearchConfig::default().depth)?;
    let max_plies: u16 = parse_flag(&args, "--max-plies", 300)?;
    let start = match flag_value(&args, "--fen") {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    let mut white = build_engine(flag_value(&args, "--white").unwrap_or("human"), depth)?;
    let mut black = build_engine(flag_value(&args, "--black").unwrap_or("minimax"), depth)?;
    white.new_game();
    black.new_game();

    let mut game = Game::new(start);
    println!("{}\n", render_game_state(game.state()));

    for _ in 0..max_plies {
        let side = game.state().current_player;
        let engine = match side {
            Color::White => white.as_mut(),
            Color::Black => black.as_mut(),
        };

        if engine.name() == "human" {
            print!("{} to move: ", side);
            io::stdout().flush().ok();
        }

        match game.play_turn(engine)? {
            TurnOutcome::Played(mv) => {
                println!("{} plays {}", side, mv);
                println!("{}\n", render_game_state(game.state()));
            }
            TurnOutcome::NoMove => {
                println!("{} made no move; stopping", side);
                return Ok(());
            }
            TurnOutcome::Finished(_) => break,
        }
    }

    match game.status() {
        GameStatus::Checkmate { winner } => println!("checkmate, {} wins", winner),
        GameStatus::Draw => println!("draw by stalemate"),
        GameStatus::Ongoing => println!("stopped after {} plies", game.history().len()),
    }
    println!("final position: {}", game.state().get_fen());
    Ok(())
}
