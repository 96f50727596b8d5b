use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    trace_rays(board, from, color, &DIAGONAL_DIRECTIONS, out);
}
