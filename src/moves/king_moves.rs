//! King steps and castling candidates.
//!
//! Castling is offered here only on the bookkeeping and occupancy rules.
//! Whether the king is in check or crosses an attacked square is decided by
//! the legality filter.

use crate::game_state::chess_rules::{
    KING_START_FILE, LONG_CASTLE_KING_FILE, LONG_ROOK_FILE, SHORT_CASTLE_KING_FILE,
    SHORT_ROOK_FILE,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::move_descriptions::{Move, MoveFlags};
use crate::moves::sliding_moves::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    step_targets(&game_state.board, from, color, &KING_OFFSETS, out);

    if mode == GenerationMode::Moves {
        generate_castling_moves(game_state, from, color, out);
    }
}

fn generate_castling_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let home = color.home_rank();
    if from != Square::new(home, KING_START_FILE) {
        return;
    }

    let board = &game_state.board;
    let flags = game_state.castling_flags(color);
    let rook = Some(Piece::new(PieceKind::Rook, color));

    if flags.may_castle_short()
        && board.get(Square::new(home, SHORT_ROOK_FILE)) == rook
        && (KING_START_FILE + 1..SHORT_ROOK_FILE).all(|file| board.is_empty(Square::new(home, file)))
    {
        out.push(Move::new(
            from,
            Square::new(home, SHORT_CASTLE_KING_FILE),
            MoveFlags::MOVE | MoveFlags::CASTLE_SHORT,
        ));
    }

    if flags.may_castle_long()
        && board.get(Square::new(home, LONG_ROOK_FILE)) == rook
        && (LONG_ROOK_FILE + 1..KING_START_FILE).all(|file| board.is_empty(Square::new(home, file)))
    {
        out.push(Move::new(
            from,
            Square::new(home, LONG_CASTLE_KING_FILE),
            MoveFlags::MOVE | MoveFlags::CASTLE_LONG,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::CastlingFlags;

    fn castling_position() -> GameState {
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN")
    }

    fn king_moves(game_state: &GameState, from: Square, mode: GenerationMode) -> Vec<Move> {
        let color = game_state.board.get(from).expect("king present").color;
        let mut out = Vec::new();
        generate_king_moves(game_state, from, color, mode, &mut out);
        out
    }

    #[test]
    fn king_in_center_has_eight_steps() {
        let mut game = GameState::new_empty();
        game.board.set(Square::new(3, 3), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(king_moves(&game, Square::new(3, 3), GenerationMode::Moves).len(), 8);
    }

    #[test]
    fn both_castles_offered_when_path_clear_and_unmoved() {
        let game = castling_position();
        let moves = king_moves(&game, Square::new(0, 4), GenerationMode::Moves);
        assert!(moves
            .iter()
            .any(|mv| mv.flags.contains(MoveFlags::CASTLE_SHORT) && mv.end == Square::new(0, 6)));
        assert!(moves
            .iter()
            .any(|mv| mv.flags.contains(MoveFlags::CASTLE_LONG) && mv.end == Square::new(0, 2)));
    }

    #[test]
    fn attack_mode_never_castles() {
        let game = castling_position();
        let moves = king_moves(&game, Square::new(7, 4), GenerationMode::Attacks);
        assert!(!moves.iter().any(|mv| mv.is_castle()));
    }

    #[test]
    fn moved_rook_or_blocked_path_removes_castle() {
        let mut game = castling_position();
        *game.castling_flags_mut(Color::White) = CastlingFlags {
            short_rook_moved: true,
            ..CastlingFlags::default()
        };
        game.board.set(Square::new(0, 1), Some(Piece::new(PieceKind::Knight, Color::White)));

        let moves = king_moves(&game, Square::new(0, 4), GenerationMode::Moves);
        assert!(!moves.iter().any(|mv| mv.is_castle()));
    }
}
