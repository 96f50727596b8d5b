//! FEN-to-GameState import.
//!
//! Import is tolerant: placement characters that are neither digits, `/`,
//! nor piece letters occupy a file but place nothing. The side to move is
//! White only for a leading `w`. When the castling field is present it seeds
//! the moved-flags; when the en-passant field names a square it seeds the
//! last move with the implied double push. Clocks are accepted and ignored.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::game_state::{CastlingFlags, GameState, LastMove};
use crate::utils::algebraic::parse_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    if fen.split_whitespace().next().is_none() {
        return Err(ChessError::EmptyPosition);
    }

    let mut game_state = GameState::new_empty();
    apply_fen(&mut game_state, fen);
    Ok(game_state)
}

/// Overwrites `game_state` from `fen`. An empty string leaves an empty board.
pub fn apply_fen(game_state: &mut GameState, fen: &str) {
    let mut parts = fen.split_whitespace();
    *game_state = GameState::new_empty();

    if let Some(placement) = parts.next() {
        parse_placement(placement, game_state);
    }

    game_state.current_player = match parts.next().and_then(|side| side.chars().next()) {
        Some('w') | None => Color::White,
        Some(_) => Color::Black,
    };

    if let Some(castling) = parts.next() {
        for color in [Color::White, Color::Black] {
            *game_state.castling_flags_mut(color) = castling_flags_from_field(castling, color);
        }
    }

    if let Some(en_passant) = parts.next() {
        game_state.last_move = implied_double_push(en_passant, game_state.current_player.opposite());
    }
}

fn parse_placement(placement: &str, game_state: &mut GameState) {
    let mut rank: i8 = 7;
    let mut file: i8 = 0;

    // The cursor saturates so overlong text stays off the board.
    for ch in placement.chars() {
        match ch {
            '1'..='8' => file = file.saturating_add((ch as u8 - b'0') as i8),
            '/' => {
                rank = rank.saturating_sub(1);
                file = 0;
            }
            _ => {
                if let Some(piece) = Piece::from_fen_char(ch) {
                    game_state.board.set(Square::new(rank, file), Some(piece));
                }
                file = file.saturating_add(1);
            }
        }
    }
}

fn castling_flags_from_field(field: &str, color: Color) -> CastlingFlags {
    let (short, long) = match color {
        Color::White => ('K', 'Q'),
        Color::Black => ('k', 'q'),
    };
    let may_short = field.contains(short);
    let may_long = field.contains(long);

    CastlingFlags {
        king_moved: !may_short && !may_long,
        short_rook_moved: !may_short,
        long_rook_moved: !may_long,
    }
}

fn implied_double_push(field: &str, pusher: Color) -> Option<LastMove> {
    let target = parse_square(field).ok()?;
    let forward = pusher.forward();
    Some(LastMove {
        start: target.offset(-forward, 0),
        end: target.offset(forward, 0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.current_player, Color::White);
        assert_eq!(game_state.board.pieces().count(), 32);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(parse_fen("   "), Err(ChessError::EmptyPosition));
    }

    #[test]
    fn placement_only_defaults_to_white_with_all_rights() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement-only FEN");
        assert_eq!(game.current_player, Color::White);
        assert!(game.castling_flags(Color::White).may_castle_short());
        assert!(game.castling_flags(Color::Black).may_castle_long());
    }

    #[test]
    fn any_side_letter_but_w_means_black() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 x").expect("valid FEN");
        assert_eq!(game.current_player, Color::Black);
    }

    #[test]
    fn unknown_characters_are_skipped_as_empty_files() {
        let game = parse_fen("4k3/8/8/8/8/8/8/R?2K3 w - - 0 1").expect("tolerant FEN");
        assert_eq!(
            game.board.get(Square::new(0, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.board.get(Square::new(0, 1)), None);
        assert_eq!(
            game.board.get(Square::new(0, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn castling_field_seeds_moved_flags() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("valid FEN");
        let white = game.castling_flags(Color::White);
        let black = game.castling_flags(Color::Black);

        assert!(white.may_castle_short() && !white.may_castle_long());
        assert!(!black.may_castle_short() && black.may_castle_long());

        let none = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b - - 0 1").expect("valid FEN");
        assert!(none.castling_flags(Color::Black).king_moved);
    }

    #[test]
    fn en_passant_field_seeds_last_move() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("valid FEN");
        assert_eq!(
            game.last_move,
            Some(LastMove {
                start: Square::new(6, 3),
                end: Square::new(4, 3),
            })
        );
    }

    #[test]
    fn overlong_placement_runs_are_ignored() {
        let digits = parse_fen(&"8".repeat(20)).expect("tolerant FEN");
        assert_eq!(digits.board.pieces().count(), 0);

        let slashes = parse_fen(&"/".repeat(200)).expect("tolerant FEN");
        assert_eq!(slashes.board.pieces().count(), 0);

        let unknown = parse_fen(&format!("{}K", "?".repeat(300))).expect("tolerant FEN");
        assert_eq!(unknown.board.pieces().count(), 0);

        let past_rank_one = parse_fen(&format!("{}K", "/".repeat(300))).expect("tolerant FEN");
        assert_eq!(past_rank_one.board.pieces().count(), 0);
    }
}
