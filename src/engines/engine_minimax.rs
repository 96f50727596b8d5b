//! Fixed-depth minimax chooser.
//!
//! Wraps `search_root` with a configurable depth, evaluator, and move
//! ordering. Equal-scoring root moves are picked between at random, so two
//! games from the same position may diverge.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::ScorerKind;
use crate::search::minimax::{search_root, SearchConfig, SCORE_INFINITY};

pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: ScorerKind,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: u8, rng: StdRng) -> Self {
        Self {
            config: SearchConfig {
                depth: depth.max(1),
                ..SearchConfig::default()
            },
            scorer: ScorerKind::default(),
            rng,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn scorer(&self) -> ScorerKind {
        self.scorer
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

fn invalid(name: &str, value: &str) -> ChessError {
    ChessError::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.trim().parse().map_err(|_| invalid(name, value))?;
                self.config.depth = depth.max(1);
            }
            "captures_first" => {
                self.config.captures_first =
                    value.trim().parse().map_err(|_| invalid(name, value))?;
            }
            "evaluator" => {
                self.scorer = value.trim().parse()?;
            }
            _ => return Err(invalid(name, value)),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let depth = self.config.depth.max(1);
        let result = search_root(
            game_state,
            legal_moves,
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            &self.scorer,
            self.config.move_ordering(),
            &mut self.rng,
        );

        debug!(
            depth,
            score = result.score,
            nodes = result.nodes,
            chosen = ?result.move_index,
            "minimax engine decided"
        );

        let mut out = EngineOutput {
            chosen_index: result.move_index,
            info_lines: Vec::with_capacity(2),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.score, result.nodes
        ));
        if let Some(mv) = result.move_index.and_then(|i| legal_moves.get(i)) {
            out.info_lines.push(format!("info string bestmove {}", mv));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_all_legal_moves;

    #[test]
    fn finds_back_rank_mate() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("valid FEN");
        let moves = generate_all_legal_moves(&game);
        let mut engine = MinimaxEngine::with_seed(2, 11);

        let out = engine.choose_move(&game, &moves).expect("search never fails");
        let chosen = moves[out.chosen_index.expect("white has moves")];

        assert_eq!(chosen.to_string(), "a1a8");
        assert!(out.info_lines[0].starts_with("info depth 2"));
    }

    #[test]
    fn options_update_configuration() {
        let mut engine = MinimaxEngine::with_seed(3, 0);

        engine.set_option("depth", "0").expect("depth parses");
        assert_eq!(engine.config().depth, 1);

        engine.set_option("captures_first", "false").expect("bool parses");
        assert!(!engine.config().captures_first);

        engine.set_option("evaluator", "material").expect("known evaluator");
        assert_eq!(engine.scorer(), ScorerKind::Material);

        assert!(engine.set_option("depth", "deep").is_err());
        assert!(engine.set_option("evaluator", "neural").is_err());
        assert!(engine.set_option("hash", "64").is_err());
    }

    #[test]
    fn mated_side_makes_no_choice() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("valid FEN");
        let mut engine = MinimaxEngine::with_seed(2, 5);
        let out = engine.choose_move(&game, &[]).expect("search never fails");
        assert_eq!(out.chosen_index, None);
    }
}
