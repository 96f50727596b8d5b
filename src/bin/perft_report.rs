//! Perft report for a single position.
//!
//! `cargo run --release --bin perft_report -- --fen "<FEN>" --depth 4`
//!
//! Prints the node, capture, en-passant, castle, promotion, check, and
//! checkmate counts for every depth from 1 up to the requested one.

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_core::errors::{ChessError, ChessResult};
use chess_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_core::game_state::game_state::GameState;
use chess_core::move_generation::perft::perft;

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fen = flag_value(&args, "--fen").unwrap_or(STARTING_POSITION_FEN);
    let depth: u8 = match flag_value(&args, "--depth") {
        Some(text) => text.parse().map_err(|_| ChessError::InvalidOption {
            name: "depth".to_owned(),
            value: text.to_owned(),
        })?,
        None => 3,
    };

    let game_state = GameState::from_fen(fen)?;
    info!(fen, depth, "running perft");

    for d in 1..=depth {
        let started = Utc::now();
        let counts = perft(&game_state, d);
        let elapsed_ms = (Utc::now() - started).num_milliseconds();

        println!("depth {:>2} {} time_ms={}", d, counts, elapsed_ms);
    }
    Ok(())
}
