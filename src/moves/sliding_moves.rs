//! Ray casting shared by bishops, rooks, and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::{Move, MoveFlags};

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Steps outward along each `(rank, file)` direction. A ray ends when it
/// leaves the board, includes the first enemy piece as a capture, and stops
/// short of the first friendly piece.
pub fn trace_rays(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(rank_step, file_step) in directions {
        let mut target = from.offset(rank_step, file_step);

        while target.is_on_board() {
            match board.get(target) {
                None => out.push(Move::new(from, target, MoveFlags::MOVE)),
                Some(piece) if piece.color != color => {
                    out.push(Move::new(from, target, MoveFlags::MOVE | MoveFlags::CAPTURE));
                    break;
                }
                Some(_) => break,
            }

            target = target.offset(rank_step, file_step);
        }
    }
}

/// Single-step variant used by knights and kings: each offset is tried once
/// with the same occupancy rule as a ray's last step.
pub fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(rank_step, file_step) in offsets {
        let target = from.offset(rank_step, file_step);
        if !target.is_on_board() {
            continue;
        }

        match board.get(target) {
            None => out.push(Move::new(from, target, MoveFlags::MOVE)),
            Some(piece) if piece.color != color => {
                out.push(Move::new(from, target, MoveFlags::MOVE | MoveFlags::CAPTURE));
            }
            Some(_) => {}
        }
    }
}
