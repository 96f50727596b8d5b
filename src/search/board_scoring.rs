//! Pluggable static evaluation.
//!
//! Search stays independent of the heuristic by calling through `Evaluator`.
//! Scores are from the perspective of the color passed in. Plain closures
//! with the matching signature are evaluators too.

use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Magnitude of a checkmate score; larger than any material total.
pub const MATE_SCORE: i32 = 1_000_000;

pub trait Evaluator: Send + Sync {
    fn evaluate(&self, game_state: &GameState, color: Color) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState, Color) -> i32 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, game_state: &GameState, color: Color) -> i32 {
        self(game_state, color)
    }
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 100,
    }
}

/// Own material minus opponent material.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn material(game_state: &GameState, color: Color) -> i32 {
        game_state
            .board
            .pieces_of(color)
            .map(|(_, piece)| piece_value(piece.kind))
            .sum()
    }
}

impl Evaluator for MaterialScorer {
    fn evaluate(&self, game_state: &GameState, color: Color) -> i32 {
        Self::material(game_state, color) - Self::material(game_state, color.opposite())
    }
}

/// Material plus a per-square preference for each piece kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMaterialScorer;

impl WeightedMaterialScorer {
    pub fn weighted_material(game_state: &GameState, color: Color) -> i32 {
        game_state
            .board
            .pieces_of(color)
            .map(|(square, piece)| piece_value(piece.kind) + square_bonus(piece, square))
            .sum()
    }
}

impl Evaluator for WeightedMaterialScorer {
    fn evaluate(&self, game_state: &GameState, color: Color) -> i32 {
        Self::weighted_material(game_state, color)
            - Self::weighted_material(game_state, color.opposite())
    }
}

/// Evaluator selected by name, used where the choice comes from text options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerKind {
    Material,
    #[default]
    Weighted,
}

impl FromStr for ScorerKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(ScorerKind::Material),
            "weighted" => Ok(ScorerKind::Weighted),
            _ => Err(ChessError::InvalidOption {
                name: "evaluator".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

impl Evaluator for ScorerKind {
    fn evaluate(&self, game_state: &GameState, color: Color) -> i32 {
        match self {
            ScorerKind::Material => MaterialScorer.evaluate(game_state, color),
            ScorerKind::Weighted => WeightedMaterialScorer.evaluate(game_state, color),
        }
    }
}

/// Tables are laid out as seen from White's side of the board: the first row
/// is rank 8. Black reads them mirrored.
fn square_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::White => 7 - square.rank,
        Color::Black => square.rank,
    };
    let idx = row as usize * 8 + square.file as usize;

    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[idx]
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(MaterialScorer.evaluate(&game, Color::White), 0);
        assert_eq!(WeightedMaterialScorer.evaluate(&game, Color::White), 0);
        assert_eq!(WeightedMaterialScorer.evaluate(&game, Color::Black), 0);
        assert_eq!(MaterialScorer::material(&game, Color::White), 4000);
    }

    #[test]
    fn material_is_antisymmetric() {
        let game = GameState::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("valid FEN");
        assert_eq!(MaterialScorer.evaluate(&game, Color::White), -400);
        assert_eq!(MaterialScorer.evaluate(&game, Color::Black), 400);
    }

    #[test]
    fn tables_are_mirrored_for_black() {
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(
            square_bonus(white_knight, Square::new(2, 5)),
            square_bonus(black_knight, Square::new(5, 5))
        );
        assert_eq!(square_bonus(white_knight, Square::new(0, 0)), -50);

        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(square_bonus(white_pawn, Square::new(6, 3)), 50);
    }

    #[test]
    fn closures_and_named_kinds_are_evaluators() {
        let game = GameState::new_game();
        let constant = |_: &GameState, _: Color| 7;
        assert_eq!(constant.evaluate(&game, Color::Black), 7);
        assert_eq!("Material".parse::<ScorerKind>(), Ok(ScorerKind::Material));
        assert!("nnue".parse::<ScorerKind>().is_err());
    }
}
