//! Terminal-state detection: checkmate, stalemate, and the draw rule.
//!
//! `is_draw` is stalemate of either color. Repetition, the fifty-move rule,
//! and insufficient material are not tracked.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw,
}

/// Only meaningful for `color == game_state.current_player`: legal moves are
/// always generated for the side to move.
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_in_check(game_state, color) && generate_all_legal_moves(game_state).is_empty()
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_in_check(game_state, color) && generate_all_legal_moves(game_state).is_empty()
}

pub fn is_draw(game_state: &GameState) -> bool {
    is_stalemate(game_state, Color::White) || is_stalemate(game_state, Color::Black)
}

/// Winner if the side to move has been mated.
pub fn checkmate_winner(game_state: &GameState) -> Option<Color> {
    let side = game_state.current_player;
    is_checkmate(game_state, side).then(|| side.opposite())
}

/// Classifies the position for the side to move. Checkmate is tested before
/// the draw rule, matching the order the search uses.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let side = game_state.current_player;
    if !generate_all_legal_moves(game_state).is_empty() {
        return GameStatus::Ongoing;
    }

    if is_in_check(game_state, side) {
        GameStatus::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameStatus::Draw
    }
}
