//! Conversions between squares/moves and algebraic text.
//!
//! Squares read as `e4`; moves use long algebraic form, `e2e4`, with a
//! trailing piece letter for promotions (`e7e8q`).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::moves::move_descriptions::{Move, MoveRequest};

pub fn square_to_algebraic(square: Square) -> String {
    if !square.is_on_board() {
        return "??".to_owned();
    }
    let file = char::from(b'a' + square.file as u8);
    let rank = char::from(b'1' + square.rank as u8);
    format!("{file}{rank}")
}

pub fn parse_square(text: &str) -> ChessResult<Square> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    };

    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok(Square::new((rank as u8 - b'1') as i8, (file as u8 - b'a') as i8))
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = square_to_algebraic(mv.start);
    out.push_str(&square_to_algebraic(mv.end));
    if let Some(piece) = mv.promotion {
        out.push(piece.kind.to_char());
    }
    out
}

pub fn parse_long_algebraic(text: &str) -> ChessResult<MoveRequest> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let invalid = |_| ChessError::InvalidMoveText(text.to_owned());
    let start = parse_square(&text[0..2]).map_err(invalid)?;
    let end = parse_square(&text[2..4]).map_err(invalid)?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(kind)
            }
            _ => return Err(ChessError::InvalidMoveText(text.to_owned())),
        },
    };

    Ok(MoveRequest {
        start,
        end,
        promotion,
    })
}

/// Resolves move text against the legal moves of the side to move.
pub fn resolve_long_algebraic(game_state: &GameState, text: &str) -> ChessResult<Move> {
    let request = parse_long_algebraic(text)?;
    let moves = generate_all_legal_moves(game_state);
    request
        .find_in(&moves)
        .map(|idx| moves[idx])
        .ok_or_else(|| ChessError::NoMatchingMove(text.trim().to_owned()))
}
