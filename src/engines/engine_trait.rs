//! Move-chooser abstraction.
//!
//! A chooser is handed the current state together with its full legal move
//! list and answers with an index into that list, or no choice at all. The
//! human adapter, the random picker, and the minimax searcher all plug in
//! behind this one trait.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Index into the legal move list the engine was given.
    pub chosen_index: Option<usize>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput>;
}
