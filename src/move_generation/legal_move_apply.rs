//! State transition for already-legal moves.
//!
//! Relocates the castling rook, removes the pawn taken en passant, keeps the
//! monotonic castling flags current, places promoted pieces, and records the
//! move for next-ply en-passant detection. The side to move is left alone;
//! flipping it belongs to whoever drives the game or the search.

use crate::game_state::chess_rules::{
    LONG_CASTLE_ROOK_FILE, LONG_ROOK_FILE, SHORT_CASTLE_ROOK_FILE, SHORT_ROOK_FILE,
};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::{GameState, LastMove};
use crate::moves::move_descriptions::{Move, MoveFlags};

/// Returns a copy of `game_state` with `mv` applied.
#[inline]
pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let mut next = game_state.clone();
    apply_move_in_place(&mut next, mv);
    next
}

pub fn apply_move_in_place(game_state: &mut GameState, mv: &Move) {
    let Some(piece) = game_state.board.get(mv.start) else {
        return;
    };
    let color = piece.color;

    update_castling_flags(game_state, color, piece.kind, mv);

    if mv.flags.contains(MoveFlags::CASTLE_SHORT) {
        move_rook(game_state, mv.start.rank, SHORT_ROOK_FILE, SHORT_CASTLE_ROOK_FILE);
    }
    if mv.flags.contains(MoveFlags::CASTLE_LONG) {
        move_rook(game_state, mv.start.rank, LONG_ROOK_FILE, LONG_CASTLE_ROOK_FILE);
    }

    if mv.is_en_passant() {
        game_state.board.set(Square::new(mv.start.rank, mv.end.file), None);
    } else if mv.is_capture() {
        game_state.board.set(mv.end, None);
    }

    if mv.flags.contains(MoveFlags::MOVE) {
        game_state.board.set(mv.end, Some(piece));
        game_state.board.set(mv.start, None);
    }

    if mv.is_promotion() {
        if let Some(promoted) = mv.promotion {
            game_state.board.set(mv.end, Some(promoted));
        }
    }

    game_state.last_move = Some(LastMove {
        start: mv.start,
        end: mv.end,
    });
}

fn move_rook(game_state: &mut GameState, rank: i8, from_file: i8, to_file: i8) {
    let from = Square::new(rank, from_file);
    let rook = game_state.board.get(from);
    game_state.board.set(from, None);
    game_state.board.set(Square::new(rank, to_file), rook);
}

fn update_castling_flags(game_state: &mut GameState, color: Color, kind: PieceKind, mv: &Move) {
    let home = color.home_rank();
    let flags = game_state.castling_flags_mut(color);

    match kind {
        PieceKind::King => flags.king_moved = true,
        PieceKind::Rook if mv.start == Square::new(home, SHORT_ROOK_FILE) => {
            flags.short_rook_moved = true;
        }
        PieceKind::Rook if mv.start == Square::new(home, LONG_ROOK_FILE) => {
            flags.long_rook_moved = true;
        }
        _ => {}
    }

    // Landing on an enemy rook's home square takes that castle away.
    let enemy = color.opposite();
    let enemy_home = enemy.home_rank();
    if mv.end == Square::new(enemy_home, SHORT_ROOK_FILE) {
        game_state.castling_flags_mut(enemy).short_rook_moved = true;
    } else if mv.end == Square::new(enemy_home, LONG_ROOK_FILE) {
        game_state.castling_flags_mut(enemy).long_rook_moved = true;
    }
}
