use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    trace_rays(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
