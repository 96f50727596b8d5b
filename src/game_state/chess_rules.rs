//! Canonical chess-rule constants.
//!
//! Starting position, promotion choices, and the fixed files involved in
//! castling.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pieces a pawn may promote to, in the order moves are generated.
pub const PROMOTION_OPTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const KING_START_FILE: i8 = 4;
pub const SHORT_ROOK_FILE: i8 = 7;
pub const LONG_ROOK_FILE: i8 = 0;

/// King destination files for short and long castling.
pub const SHORT_CASTLE_KING_FILE: i8 = 6;
pub const LONG_CASTLE_KING_FILE: i8 = 2;

/// Rook destination files for short and long castling.
pub const SHORT_CASTLE_ROOK_FILE: i8 = 5;
pub const LONG_CASTLE_ROOK_FILE: i8 = 3;
