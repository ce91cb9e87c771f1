//! One-Ply Chess Engine
//!
//! Scores every legal move with a static heuristic and subtracts the best
//! reply the opponent has to it. Mates in one are always played and moves
//! that allow a mate in one are never chosen while anything else is left.
//!
//! There is no deeper search: this is the baseline greedy engine.

mod config;
mod error;
mod eval;
mod mate;
mod scan;
mod select;

#[cfg(test)]
mod scripted_board;

use chess_core::{Board, Clock, Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

pub use config::EngineConfig;
pub use error::{ConfigError, SelectError};
pub use eval::{evaluate_move, piece_value, MOVE_VALUES, PIECE_VALUES, PROMOTION_BONUS};
pub use mate::is_immediate_mate;
pub use scan::{scan_responses, ReplyScan};
pub use select::{Choice, Selection, Selector, DEFAULT_JITTER_RANGE, MATE_SCORE, MAX_JITTER_RANGE};

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Engine wrapper around [`Selector`] with a seedable standard generator.
#[derive(Debug, Clone)]
pub struct OnePlyEngine {
    config: EngineConfig,
    selector: Selector<StdRng>,
}

impl Default for OnePlyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OnePlyEngine {
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    pub fn from_config(config: EngineConfig) -> Self {
        let selector = Selector::with_jitter(rng_for(config.seed), config.jitter_range);
        Self { config, selector }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Engine for OnePlyEngine {
    fn search(&mut self, pos: &Position, clock: &Clock) -> SearchResult {
        let mut pos_copy = pos.clone();
        let moves = pos_copy.legal_moves();
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0,
                nodes: 0,
            };
        }

        match self.selector.select(&mut pos_copy, &moves, clock) {
            Ok(sel) => SearchResult {
                best_move: Some(sel.mv),
                score: sel.score,
                nodes: sel.nodes,
            },
            Err(e) => {
                warn!(error = %e, "no move to play");
                SearchResult {
                    best_move: None,
                    score: 0,
                    nodes: 0,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "OnePly v1.0"
    }

    fn new_game(&mut self) {
        // Fixed-seed engines restart their random sequence every game
        if self.config.seed.is_some() {
            self.selector.set_rng(rng_for(self.config.seed));
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match self.config.set_option(name, value) {
            Ok(true) => {
                // Only a new seed restarts the random sequence
                if name.eq_ignore_ascii_case("seed") {
                    self.selector.set_rng(rng_for(self.config.seed));
                }
                self.selector.set_jitter_range(self.config.jitter_range);
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(error = %e, "ignoring option");
                false
            }
        }
    }
}
