//! Move values and their kind flags.
//!
//! A `Move` carries exactly one semantic move. The four promotion choices
//! for a pawn reaching the last rank are four distinct values sharing the
//! same start and end squares.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::move_to_long_algebraic;

/// Bitwise-combinable move kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const MOVE: MoveFlags = MoveFlags(1 << 0);
    pub const PROMOTE: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLE_SHORT: MoveFlags = MoveFlags(1 << 3);
    pub const CASTLE_LONG: MoveFlags = MoveFlags(1 << 4);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 5);

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: MoveFlags) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn union(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub flags: MoveFlags,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square, flags: MoveFlags) -> Self {
        Self {
            start,
            end,
            flags,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(start: Square, end: Square, flags: MoveFlags, piece: Piece) -> Self {
        Self {
            start,
            end,
            flags,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.flags.intersects(MoveFlags::CASTLE_SHORT.union(MoveFlags::CASTLE_LONG))
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTE)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

/// Index of the move in `moves` going from `start` to `end`. When several
/// promotion moves share the squares, `promotion` picks one; `None` matches
/// the first of them.
pub fn find_move(
    moves: &[Move],
    start: Square,
    end: Square,
    promotion: Option<PieceKind>,
) -> Option<usize> {
    moves.iter().position(|mv| {
        mv.start == start
            && mv.end == end
            && match promotion {
                Some(kind) => mv.promotion.map(|piece| piece.kind) == Some(kind),
                None => true,
            }
    })
}

/// Start/end squares plus an optional promotion kind, as typed by a person
/// or read from text, before it is matched against the legal move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[inline]
    pub fn find_in(&self, moves: &[Move]) -> Option<usize> {
        find_move(moves, self.start, self.end, self.promotion)
    }
}
