//! Pawn pushes, captures, en passant, and promotion expansion.

use crate::game_state::chess_rules::PROMOTION_OPTIONS;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::move_descriptions::{Move, MoveFlags};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let board = &game_state.board;
    let forward = color.forward();

    if mode == GenerationMode::Attacks {
        for file_step in [-1, 1] {
            let target = from.offset(forward, file_step);
            if target.is_on_board() {
                out.push(Move::new(from, target, MoveFlags::MOVE | MoveFlags::CAPTURE));
            }
        }
        return;
    }

    let single = from.offset(forward, 0);
    if single.is_on_board() && board.is_empty(single) {
        push_with_promotions(out, from, single, MoveFlags::MOVE, color);

        let double = from.offset(2 * forward, 0);
        if from.rank == color.pawn_rank() && board.is_empty(double) {
            out.push(Move::new(from, double, MoveFlags::MOVE));
        }
    }

    for file_step in [-1, 1] {
        let target = from.offset(forward, file_step);
        if let Some(piece) = board.get(target) {
            if piece.color != color {
                push_with_promotions(out, from, target, MoveFlags::MOVE | MoveFlags::CAPTURE, color);
            }
        }
    }

    if let Some(target) = en_passant_target(game_state, from, color) {
        out.push(Move::new(
            from,
            target,
            MoveFlags::MOVE | MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
        ));
    }
}

/// Landing square for an en-passant capture from `from`, if the previous
/// ply was an enemy pawn double push ending right beside it.
fn en_passant_target(game_state: &GameState, from: Square, color: Color) -> Option<Square> {
    let last = game_state.last_move?;
    let pushed = game_state.board.get(last.end)?;

    let is_enemy_pawn = pushed.kind == PieceKind::Pawn && pushed.color != color;
    let was_double_push = last.start.file == last.end.file
        && (last.start.rank - last.end.rank).abs() == 2;
    let is_beside = last.end.rank == from.rank && (last.end.file - from.file).abs() == 1;

    if is_enemy_pawn && was_double_push && is_beside {
        Some(Square::new(from.rank + color.forward(), last.end.file))
    } else {
        None
    }
}

fn push_with_promotions(out: &mut Vec<Move>, from: Square, to: Square, flags: MoveFlags, color: Color) {
    if to.rank != color.promotion_rank() {
        out.push(Move::new(from, to, flags));
        return;
    }

    for kind in PROMOTION_OPTIONS {
        out.push(Move::with_promotion(
            from,
            to,
            flags | MoveFlags::PROMOTE,
            Piece::new(kind, color),
        ));
    }
}
