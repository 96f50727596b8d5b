//! Minimax search with alpha-beta pruning.
//!
//! The evaluator and the optional move ordering are injected by the caller.
//! Every node works on its own cloned state, so sibling branches never share
//! mutable data. Ties at the root are broken by shuffling the root moves
//! before the search starts; the score itself does not depend on that order.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{generate_all_legal_moves, has_any_legal_move};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{Evaluator, MATE_SCORE};

/// Initial window bound; strictly outside every reachable score.
pub const SCORE_INFINITY: i32 = 10 * MATE_SCORE;

/// Comparator applied to a node's children before recursing into them.
pub type MoveOrdering = fn(&Move, &Move) -> Ordering;

/// Captures sort ahead of quiet moves; otherwise the order is kept.
pub fn captures_first(a: &Move, b: &Move) -> Ordering {
    b.is_capture().cmp(&a.is_capture())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub captures_first: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            captures_first: true,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn move_ordering(&self) -> Option<MoveOrdering> {
        self.captures_first.then_some(captures_first as MoveOrdering)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Index into the root move list; `None` when there was nothing to choose.
    pub move_index: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

/// Searches the legal moves of the side to move. The returned index refers
/// to `generate_all_legal_moves(game_state)`.
pub fn search<E, R>(
    game_state: &GameState,
    depth: u8,
    alpha: i32,
    beta: i32,
    evaluator: &E,
    move_order: Option<MoveOrdering>,
    rng: &mut R,
) -> SearchResult
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let root_moves = generate_all_legal_moves(game_state);
    search_root(game_state, &root_moves, depth, alpha, beta, evaluator, move_order, rng)
}

/// `search` with a full window and the ordering from `config`.
pub fn search_with_config<E, R>(
    game_state: &GameState,
    config: &SearchConfig,
    evaluator: &E,
    rng: &mut R,
) -> SearchResult
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    search(
        game_state,
        config.depth,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        evaluator,
        config.move_ordering(),
        rng,
    )
}

/// Searches a caller-supplied root list, which must be the legal moves of
/// `game_state`. The returned index refers to `root_moves`.
#[allow(clippy::too_many_arguments)]
pub fn search_root<E, R>(
    game_state: &GameState,
    root_moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    evaluator: &E,
    move_order: Option<MoveOrdering>,
    rng: &mut R,
) -> SearchResult
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let maximizing = game_state.current_player;
    let mut searcher = Searcher {
        evaluator,
        move_order,
        maximizing,
        nodes: 1,
    };

    if root_moves.is_empty() {
        let score = searcher.terminal_score(game_state);
        return SearchResult {
            move_index: None,
            score,
            nodes: searcher.nodes,
        };
    }

    let mut order: Vec<usize> = (0..root_moves.len()).collect();
    order.shuffle(rng);
    if let Some(cmp) = move_order {
        order.sort_by(|&a, &b| cmp(&root_moves[a], &root_moves[b]));
    }

    // Nothing is looked ahead at depth 0: the first ordered move stands with
    // the static score of the root.
    if depth == 0 {
        return SearchResult {
            move_index: Some(order[0]),
            score: evaluator.evaluate(game_state, maximizing),
            nodes: searcher.nodes,
        };
    }

    let mut best_index = order[0];
    let mut best_score = -SCORE_INFINITY;
    for &idx in &order {
        let mut next = apply_move(game_state, &root_moves[idx]);
        next.flip_player();

        let score = searcher.minimax(&next, depth - 1, alpha, beta);
        if score > best_score {
            best_score = score;
            best_index = idx;
        }
        alpha = alpha.max(best_score);
        if alpha > beta {
            break;
        }
    }

    debug!(
        depth,
        score = best_score,
        move_index = best_index,
        nodes = searcher.nodes,
        "search finished"
    );

    SearchResult {
        move_index: Some(best_index),
        score: best_score,
        nodes: searcher.nodes,
    }
}

struct Searcher<'a, E: ?Sized> {
    evaluator: &'a E,
    move_order: Option<MoveOrdering>,
    maximizing: Color,
    nodes: u64,
}

impl<E: Evaluator + ?Sized> Searcher<'_, E> {
    /// Score of a node whose side to move has no legal moves.
    fn terminal_score(&self, game_state: &GameState) -> i32 {
        let side = game_state.current_player;
        if !is_in_check(game_state, side) {
            0
        } else if side == self.maximizing {
            -MATE_SCORE
        } else {
            MATE_SCORE
        }
    }

    fn minimax(&mut self, game_state: &GameState, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            if !has_any_legal_move(game_state) {
                return self.terminal_score(game_state);
            }
            return self.evaluator.evaluate(game_state, self.maximizing);
        }

        let mut moves = generate_all_legal_moves(game_state);
        if moves.is_empty() {
            return self.terminal_score(game_state);
        }
        if let Some(cmp) = self.move_order {
            moves.sort_by(cmp);
        }

        let maximizing_node = game_state.current_player == self.maximizing;
        let mut best = if maximizing_node {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for mv in &moves {
            let mut next = apply_move(game_state, mv);
            next.flip_player();
            let score = self.minimax(&next, depth - 1, alpha, beta);

            if maximizing_node {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha > beta {
                break;
            }
        }

        best
    }
}
