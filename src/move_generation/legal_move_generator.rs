//! Legality filter over the pseudo-legal generator.
//!
//! Every candidate is applied to a clone and kept only if the mover's king is
//! not attacked afterwards. Castling is additionally rejected when the king
//! starts in check or crosses an attacked square.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{controls, is_in_check};
use crate::move_generation::move_generator::{pseudo_legal_moves, GenerationMode, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        generate_all_legal_moves(game_state)
    }
}

/// Legal moves of the piece on `square`, whichever color it is.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<Move> {
    let Some(piece) = game_state.board.get(square) else {
        return Vec::new();
    };
    let mover = piece.color;
    let enemy = mover.opposite();

    let mut candidates = Vec::with_capacity(32);
    pseudo_legal_moves(game_state, square, GenerationMode::Moves, &mut candidates);

    let mut in_check_now: Option<bool> = None;
    candidates.retain(|mv| {
        if mv.is_castle() {
            let in_check = *in_check_now.get_or_insert_with(|| is_in_check(game_state, mover));
            let transit = Square::new(mv.start.rank, (mv.start.file + mv.end.file) / 2);
            if in_check || controls(game_state, transit, enemy) || controls(game_state, mv.end, enemy)
            {
                return false;
            }
        }

        !is_in_check(&apply_move(game_state, mv), mover)
    });

    candidates
}

/// Union of `legal_moves` over every piece of the side to move.
pub fn generate_all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (square, _) in game_state.board.pieces_of(game_state.current_player) {
        moves.extend(legal_moves(game_state, square));
    }
    moves
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.current_player)
        .any(|(square, _)| !legal_moves(game_state, square).is_empty())
}
