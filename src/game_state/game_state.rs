//! Core game state representation.
//!
//! `GameState` owns the board plus the few pieces of history the rules need:
//! the previous move (for en passant), per-color castling flags, and the side
//! to move. Hypothetical futures are explored by cloning and applying moves;
//! only the game in progress is ever mutated for real.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, Square};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Start and end squares of the most recently applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub start: Square,
    pub end: Square,
}

/// Monotonic castling bookkeeping for one color. Flags are only ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingFlags {
    pub king_moved: bool,
    pub short_rook_moved: bool,
    pub long_rook_moved: bool,
}

impl CastlingFlags {
    #[inline]
    pub const fn may_castle_short(self) -> bool {
        !self.king_moved && !self.short_rook_moved
    }

    #[inline]
    pub const fn may_castle_long(self) -> bool {
        !self.king_moved && !self.long_rook_moved
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub last_move: Option<LastMove>,
    pub castling: [CastlingFlags; 2],
    pub current_player: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            last_move: None,
            castling: [CastlingFlags::default(); 2],
            current_player: Color::White,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        crate::utils::fen_parser::apply_fen(&mut game_state, STARTING_POSITION_FEN);
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn castling_flags(&self, color: Color) -> CastlingFlags {
        self.castling[color.index()]
    }

    #[inline]
    pub fn castling_flags_mut(&mut self, color: Color) -> &mut CastlingFlags {
        &mut self.castling[color.index()]
    }

    /// Hands the move to the other side. Drivers call this after `apply_move`.
    #[inline]
    pub fn flip_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }
}
