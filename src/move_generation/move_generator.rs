//! Pseudo-legal move dispatch and the legal generator abstraction.
//!
//! `pseudo_legal_moves` enumerates candidates for whatever piece stands on a
//! square without looking at king safety. `GenerationMode::Attacks` is the
//! variant the controls detector uses: pawns report both diagonals whether
//! or not something stands there, and kings never offer castling.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Moves the piece could make, ignoring king safety.
    Moves,
    /// Squares the piece threatens.
    Attacks,
}

/// Appends the pseudo-legal moves of the piece on `square` to `out`.
/// Empty squares produce nothing.
pub fn pseudo_legal_moves(
    game_state: &GameState,
    square: Square,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let Some(piece) = game_state.board.get(square) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, piece.color, mode, out),
        PieceKind::Knight => generate_knight_moves(&game_state.board, square, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(&game_state.board, square, piece.color, out),
        PieceKind::Rook => generate_rook_moves(&game_state.board, square, piece.color, out),
        PieceKind::Queen => generate_queen_moves(&game_state.board, square, piece.color, out),
        PieceKind::King => generate_king_moves(game_state, square, piece.color, mode, out),
    }
}

/// Produces the full legal move list for the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;

    /// Whether the side to move is currently in check.
    fn side_to_move_in_check(&self, game_state: &GameState) -> bool {
        crate::move_generation::legal_move_checks::is_in_check(
            game_state,
            game_state.current_player,
        )
    }
}
