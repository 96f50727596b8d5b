//! Error types shared across the crate.
//!
//! Only recoverable, caller-facing failures live here. A missing king during
//! a check query is an invariant violation and panics instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The position string held no tokens at all.
    #[error("position string is empty")]
    EmptyPosition,

    /// Square text was not a file letter followed by a rank digit.
    #[error("invalid square text: {0}")]
    InvalidSquare(String),

    /// Move text was not long algebraic (`e2e4`, `e7e8q`).
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// Move text parsed but matches no legal move in the current position.
    #[error("move {0} is not legal in this position")]
    NoMatchingMove(String),

    /// An engine option name was not recognised or its value did not parse.
    #[error("invalid engine option {name}={value}")]
    InvalidOption { name: String, value: String },

    /// A move chooser could not produce an answer.
    #[error("engine failure: {0}")]
    Engine(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
