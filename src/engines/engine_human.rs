//! Human-input chooser.
//!
//! Move requests come from a `MoveSource`: a queue for scripted play and
//! tests, or lines of long algebraic text read from any `BufRead`. A request
//! that matches no legal move is logged and the next one is tried. An
//! exhausted source means no choice; a source that fails to read is an
//! engine error.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::warn;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{Move, MoveRequest};
use crate::utils::algebraic::parse_long_algebraic;

pub trait MoveSource {
    /// Next requested move, `Ok(None)` once the source is exhausted.
    fn next_request(&mut self, game_state: &GameState) -> ChessResult<Option<MoveRequest>>;
}

impl MoveSource for VecDeque<MoveRequest> {
    fn next_request(&mut self, _game_state: &GameState) -> ChessResult<Option<MoveRequest>> {
        Ok(self.pop_front())
    }
}

/// Reads one move per line. Blank lines are skipped; unparseable lines are
/// logged and skipped.
pub struct LineMoveSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineMoveSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> MoveSource for LineMoveSource<R> {
    fn next_request(&mut self, _game_state: &GameState) -> ChessResult<Option<MoveRequest>> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|err| ChessError::Engine(format!("failed to read move input: {err}")))?;
            if read == 0 {
                return Ok(None);
            }

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            match parse_long_algebraic(text) {
                Ok(request) => return Ok(Some(request)),
                Err(err) => warn!(%err, "ignoring move input"),
            }
        }
    }
}

pub struct HumanEngine<S> {
    source: S,
}

impl<S: MoveSource> HumanEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: MoveSource + Send> Engine for HumanEngine<S> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();

        while let Some(request) = self.source.next_request(game_state)? {
            if let Some(index) = request.find_in(legal_moves) {
                out.chosen_index = Some(index);
                break;
            }
            warn!(?request, "requested move is not legal");
            out.info_lines
                .push("info string human_engine rejected illegal request".to_owned());
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_all_legal_moves;
    use std::io::{self, Cursor, Read};

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        }
    }

    #[test]
    fn queued_requests_skip_illegal_entries() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game);
        let queue: VecDeque<MoveRequest> = ["e2e5", "g1f3"]
            .iter()
            .map(|text| parse_long_algebraic(text).expect("well-formed text"))
            .collect();
        let mut engine = HumanEngine::new(queue);

        let out = engine.choose_move(&game, &moves).expect("human engine never fails");
        let index = out.chosen_index.expect("g1f3 is legal");

        assert_eq!(moves[index].to_string(), "g1f3");
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn line_source_skips_noise_and_stops_at_eof() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game);
        let input = Cursor::new("\nhello\ne2e4\n");
        let mut engine = HumanEngine::new(LineMoveSource::new(input));

        let first = engine.choose_move(&game, &moves).expect("human engine never fails");
        assert_eq!(
            first.chosen_index.map(|i| moves[i].to_string()),
            Some("e2e4".to_owned())
        );

        let second = engine.choose_move(&game, &moves).expect("human engine never fails");
        assert_eq!(second.chosen_index, None);
    }

    #[test]
    fn read_failure_is_an_engine_error() {
        let game = GameState::new_game();
        let moves = generate_all_legal_moves(&game);
        let reader = io::BufReader::new(BrokenReader);
        let mut engine = HumanEngine::new(LineMoveSource::new(reader));

        let err = engine.choose_move(&game, &moves).expect_err("read should fail");
        assert!(matches!(err, ChessError::Engine(_)));
    }
}
