//! Position counting ("perft") over the legal move tree.
//!
//! Check and checkmate counters are updated for every node visited, before
//! recursing. A node is counted when the walk stops there, either because
//! depth ran out or because the side to move is mated. Capture, en-passant,
//! castle, and promotion counters classify every move played on the way.

use std::fmt;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl fmt::Display for PerftCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} captures={} ep={} castles={} promotions={} checks={} checkmates={}",
            self.nodes,
            self.captures,
            self.en_passant,
            self.castles,
            self.promotions,
            self.checks,
            self.checkmates
        )
    }
}

/// Perft with the standard legal generator.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    count_positions(&LegalMoveGenerator, game_state, depth, &mut counts);
    counts
}

pub fn count_positions<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let in_check = generator.side_to_move_in_check(game_state);
    if in_check {
        counts.checks += 1;
    }

    // Leaves outside check need no move list.
    if depth == 0 && !in_check {
        counts.nodes += 1;
        return;
    }

    let moves = generator.generate_legal_moves(game_state);
    if in_check && moves.is_empty() {
        counts.checkmates += 1;
        counts.nodes += 1;
        return;
    }
    if depth == 0 {
        counts.nodes += 1;
        return;
    }

    for mv in &moves {
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.is_promotion() {
            counts.promotions += 1;
        }

        let mut next = apply_move(game_state, mv);
        next.flip_player();
        count_positions(generator, &next, depth - 1, counts);
    }
}

/// Node counts below each root move, for pinpointing generator mismatches.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    LegalMoveGenerator
        .generate_legal_moves(game_state)
        .iter()
        .map(|mv| {
            let mut next = apply_move(game_state, mv);
            next.flip_player();
            (mv.to_string(), perft(&next, depth - 1).nodes)
        })
        .collect()
}
