//! Attack ("controls") detection and check queries.
//!
//! Built on the pseudo-legal generator in attack mode, never on the legal
//! generator, so legality filtering can call into it without recursing.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{pseudo_legal_moves, GenerationMode};

/// Whether any piece of `by_color` threatens `target`.
pub fn controls(game_state: &GameState, target: Square, by_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);

    for (square, _) in game_state.board.pieces_of(by_color) {
        scratch.clear();
        pseudo_legal_moves(game_state, square, GenerationMode::Attacks, &mut scratch);
        if scratch.iter().any(|mv| mv.end == target) {
            return true;
        }
    }

    false
}

/// Square of `color`'s king.
///
/// # Panics
///
/// Panics when the king is missing. Every reachable position has exactly one
/// king per color, so a missing king is corrupted input, not a game event.
pub fn king_square(game_state: &GameState, color: Color) -> Square {
    game_state
        .board
        .find_king(color)
        .unwrap_or_else(|| panic!("no {color} king on the board"))
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    controls(game_state, king_square(game_state, color), color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
    }

    #[test]
    fn pawns_control_empty_diagonals() {
        let game = GameState::new_game();
        assert!(controls(&game, Square::new(2, 0), Color::White));
        assert!(controls(&game, Square::new(5, 7), Color::Black));
        assert!(!controls(&game, Square::new(3, 4), Color::White));
    }

    #[test]
    fn sliding_check_is_blocked_by_interposed_piece() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("valid FEN");
        assert!(is_in_check(&open, Color::Black));

        let blocked = GameState::from_fen("4k3/4n3/8/8/8/8/8/4R1K1 b - - 0 1").expect("valid FEN");
        assert!(!is_in_check(&blocked, Color::Black));
    }

    #[test]
    #[should_panic(expected = "no black king")]
    fn missing_king_is_fatal() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        is_in_check(&game, Color::Black);
    }
}
