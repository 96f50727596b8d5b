//! Uniform random move chooser.
//!
//! Used for diagnostics, self-play smoke tests, and as a weak opponent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if !legal_moves.is_empty() {
            out.chosen_index = Some(self.rng.random_range(0..legal_moves.len()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_all_legal_moves;

    #[test]
    fn picks_an_index_inside_the_list() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game);
        let mut engine = RandomEngine::with_seed(7);

        for _ in 0..50 {
            let out = engine.choose_move(&game, &moves).expect("random engine never fails");
            let index = out.chosen_index.expect("start position has moves");
            assert!(index < moves.len());
        }
    }

    #[test]
    fn no_moves_means_no_choice() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(1);
        let out = engine.choose_move(&game, &[]).expect("random engine never fails");
        assert_eq!(out.chosen_index, None);
    }

    #[test]
    fn rejects_options() {
        let mut engine = RandomEngine::with_seed(1);
        assert!(engine.set_option("depth", "3").is_err());
    }
}
