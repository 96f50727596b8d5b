//! Primitive chess value types: colors, piece kinds, pieces, and squares.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the color's pieces start on (`0` for White, `7` for Black).
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty cells are `None` at the board level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter, uppercase for White.
    pub const fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::new(kind, color))
    }
}

/// A (rank, file) pair. Off-board values are valid while generating moves
/// but never name a resting location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    #[inline]
    pub const fn offset(self, rank_step: i8, file_step: i8) -> Self {
        Self::new(self.rank + rank_step, self.file + file_step)
    }

    /// Row-major cell index, `None` when off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.rank as usize * 8 + self.file as usize)
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / 8) as i8, (index % 8) as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_is_row_major() {
        assert_eq!(Square::new(0, 0).index(), Some(0));
        assert_eq!(Square::new(3, 4).index(), Some(28));
        assert_eq!(Square::from_index(63), Square::new(7, 7));
        assert_eq!(Square::new(8, 0).index(), None);
        assert_eq!(Square::new(0, -1).index(), None);
    }

    #[test]
    fn fen_letters_carry_color_by_case() {
        let white_knight = Piece::from_fen_char('N').expect("N is a piece");
        assert_eq!(white_knight, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(white_knight.to_fen_char(), 'N');
        assert_eq!(Piece::from_fen_char('q').map(|p| p.color), Some(Color::Black));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }
}
