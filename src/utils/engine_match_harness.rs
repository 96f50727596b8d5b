//! Game session and engine-vs-engine match driver.
//!
//! `Game` owns the single real position. Every confirmed move is applied to
//! it in place and the side to move is flipped; hypothetical futures are
//! explored on clones elsewhere. A chooser index outside the legal move list
//! is logged and treated as no choice, leaving the position untouched.

use tracing::{info, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::resolve_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Move),
    /// The chooser declined or answered out of range.
    NoMove,
    /// The game was already over; nothing was asked.
    Finished(GameStatus),
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.state)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_all_legal_moves(&self.state)
    }

    /// Commits a move that is already known to be legal.
    pub fn play_move(&mut self, mv: Move) {
        let mover = self.state.current_player;
        apply_move_in_place(&mut self.state, &mv);
        self.state.flip_player();
        self.history.push(mv);
        info!(ply = self.history.len(), side = %mover, mv = %mv, "move played");
    }

    /// Resolves long algebraic text against the legal moves and plays it.
    pub fn play_text(&mut self, text: &str) -> ChessResult<Move> {
        let mv = resolve_long_algebraic(&self.state, text)?;
        self.play_move(mv);
        Ok(mv)
    }

    pub fn play_turn(&mut self, engine: &mut dyn Engine) -> ChessResult<TurnOutcome> {
        let legal_moves = self.legal_moves();
        if legal_moves.is_empty() {
            return Ok(TurnOutcome::Finished(self.status()));
        }

        let output = engine.choose_move(&self.state, &legal_moves)?;
        match output.chosen_index {
            Some(index) if index < legal_moves.len() => {
                let mv = legal_moves[index];
                self.play_move(mv);
                Ok(TurnOutcome::Played(mv))
            }
            Some(index) => {
                warn!(
                    engine = engine.name(),
                    index,
                    legal = legal_moves.len(),
                    "chooser returned an out-of-range move index"
                );
                Ok(TurnOutcome::NoMove)
            }
            None => Ok(TurnOutcome::NoMove),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    Checkmate { winner: Color },
    Draw,
    /// The side to move had legal moves but its chooser made no choice.
    NoChoice { side: Color },
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub end: MatchEnd,
    pub moves: Vec<Move>,
    pub final_state: GameState,
}

impl MatchResult {
    pub fn moves_lan(&self) -> Vec<String> {
        self.moves.iter().map(Move::to_string).collect()
    }
}

/// Plays `white` against `black` from `start` until the game ends, a chooser
/// makes no choice, or `max_plies` moves have been played.
pub fn play_match(
    start: GameState,
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    max_plies: u16,
) -> ChessResult<MatchResult> {
    white.new_game();
    black.new_game();

    let mut game = Game::new(start);
    let mut end = MatchEnd::PlyLimit;

    for _ in 0..max_plies {
        let side = game.state().current_player;
        let engine: &mut dyn Engine = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        match game.play_turn(engine)? {
            TurnOutcome::Played(_) => {}
            TurnOutcome::NoMove => {
                end = MatchEnd::NoChoice { side };
                break;
            }
            TurnOutcome::Finished(status) => {
                end = match status {
                    GameStatus::Checkmate { winner } => MatchEnd::Checkmate { winner },
                    GameStatus::Draw | GameStatus::Ongoing => MatchEnd::Draw,
                };
                break;
            }
        }
    }

    if end == MatchEnd::PlyLimit {
        if let GameStatus::Checkmate { winner } = game.status() {
            end = MatchEnd::Checkmate { winner };
        } else if game.status() == GameStatus::Draw {
            end = MatchEnd::Draw;
        }
    }

    info!(result = ?end, plies = game.history().len(), "match finished");

    Ok(MatchResult {
        end,
        final_state: game.state().clone(),
        moves: game.history,
    })
}
