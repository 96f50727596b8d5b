//! 64-cell piece grid with bounds-tolerant access.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Piece on `square`; off-board reads are empty rather than errors.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|idx| self.cells[idx])
    }

    /// Writes are ignored outside the board.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(idx) = square.index() {
            self.cells[idx] = piece;
        }
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|piece| (Square::from_index(idx), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_reads_are_empty_and_writes_are_ignored() {
        let mut board = Board::new_empty();
        let rook = Piece::new(PieceKind::Rook, Color::White);

        board.set(Square::new(-1, 3), Some(rook));
        board.set(Square::new(2, 8), Some(rook));
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.get(Square::new(9, 9)), None);

        board.set(Square::new(2, 7), Some(rook));
        assert_eq!(board.get(Square::new(2, 7)), Some(rook));
    }

    #[test]
    fn find_king_locates_each_color() {
        let mut board = Board::new_empty();
        board.set(Square::new(0, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(7, 2), Some(Piece::new(PieceKind::King, Color::Black)));

        assert_eq!(board.find_king(Color::White), Some(Square::new(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::new(7, 2)));
        board.set(Square::new(7, 2), None);
        assert_eq!(board.find_king(Color::Black), None);
    }
}
