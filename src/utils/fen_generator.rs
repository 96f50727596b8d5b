//! GameState-to-FEN export.
//!
//! Castling letters come from the moved-flags together with the king and
//! rooks still standing on their home squares. The en-passant square is
//! reported only when the last move was a pawn double push. Clocks are not
//! tracked and always read `0 1`.

use crate::game_state::chess_rules::{KING_START_FILE, LONG_ROOK_FILE, SHORT_ROOK_FILE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::with_capacity(90);

    for rank in (0..8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8 {
            match game_state.board.get(Square::new(rank, file)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.current_player {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_field(game_state));

    fen.push(' ');
    fen.push_str(&en_passant_field(game_state));

    fen.push_str(" 0 1");
    fen
}

fn castling_field(game_state: &GameState) -> String {
    let mut field = String::new();

    for color in [Color::White, Color::Black] {
        let home = color.home_rank();
        let flags = game_state.castling_flags(color);
        let king_home = game_state.board.get(Square::new(home, KING_START_FILE))
            == Some(Piece::new(PieceKind::King, color));
        let rook_on = |file| {
            game_state.board.get(Square::new(home, file)) == Some(Piece::new(PieceKind::Rook, color))
        };

        let (short, long) = match color {
            Color::White => ('K', 'Q'),
            Color::Black => ('k', 'q'),
        };
        if king_home && flags.may_castle_short() && rook_on(SHORT_ROOK_FILE) {
            field.push(short);
        }
        if king_home && flags.may_castle_long() && rook_on(LONG_ROOK_FILE) {
            field.push(long);
        }
    }

    if field.is_empty() {
        field.push('-');
    }
    field
}

fn en_passant_field(game_state: &GameState) -> String {
    let Some(last) = game_state.last_move else {
        return "-".to_owned();
    };
    let pushed_pawn = game_state
        .board
        .get(last.end)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn);

    if pushed_pawn && last.start.file == last.end.file && (last.start.rank - last.end.rank).abs() == 2 {
        let passed = Square::new((last.start.rank + last.end.rank) / 2, last.end.file);
        square_to_algebraic(passed)
    } else {
        "-".to_owned()
    }
}
