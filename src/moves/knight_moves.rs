use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
];

#[inline]
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let board = Board::new_empty();
        let mut out = Vec::new();
        generate_knight_moves(&board, Square::new(3, 3), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_corner_skips_own_pieces() {
        let mut board = Board::new_empty();
        board.set(Square::new(2, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(1, 2), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        generate_knight_moves(&board, Square::new(0, 0), Color::White, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].end, Square::new(1, 2));
        assert!(out[0].is_capture());
    }
}
