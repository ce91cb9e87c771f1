//! Move selection: score every legal move, look one reply ahead, keep the best.

use crate::error::SelectError;
use crate::eval::evaluate_move;
use crate::mate::is_immediate_mate;
use crate::scan::scan_responses;
use chess_core::{move_to_uci, Board, Clock, Move, PieceKind};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

/// Jitter is drawn from `0..DEFAULT_JITTER_RANGE`.
pub const DEFAULT_JITTER_RANGE: u32 = 50;

/// Widest jitter range a selector accepts; larger ranges are clamped.
pub const MAX_JITTER_RANGE: u32 = 1000;

/// Score reported for a move that mates on the spot.
pub const MATE_SCORE: i32 = 100_000;

/// How the chosen move was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The move checkmates immediately
    Mate,
    /// The move had the highest positive score
    Scored,
    /// Nothing scored above zero; the random pick made up front is played
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub score: i32,
    pub choice: Choice,
    /// Positions visited (candidate moves and replies made)
    pub nodes: u64,
}

/// Picks one move per turn from a list of legal moves.
///
/// All randomness (the fallback pick and the per-move jitter) comes from the
/// owned generator, so a seeded generator makes selection reproducible.
#[derive(Debug, Clone)]
pub struct Selector<R> {
    rng: R,
    jitter_range: u32,
}

impl<R: Rng> Selector<R> {
    pub fn new(rng: R) -> Self {
        Self::with_jitter(rng, DEFAULT_JITTER_RANGE)
    }

    /// Selector drawing jitter from `0..jitter_range`; 0 disables jitter.
    /// Ranges above [`MAX_JITTER_RANGE`] are clamped to it.
    pub fn with_jitter(rng: R, jitter_range: u32) -> Self {
        Self {
            rng,
            jitter_range: jitter_range.min(MAX_JITTER_RANGE),
        }
    }

    pub fn jitter_range(&self) -> u32 {
        self.jitter_range
    }

    pub fn set_jitter_range(&mut self, jitter_range: u32) {
        self.jitter_range = jitter_range.min(MAX_JITTER_RANGE);
    }

    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    fn jitter(&mut self) -> i32 {
        if self.jitter_range == 0 {
            return 0;
        }
        // jitter_range <= MAX_JITTER_RANGE, so the cast is lossless
        self.rng.gen_range(0..self.jitter_range as i32)
    }

    /// Chooses a move from `legal_moves` in `board`'s current position.
    ///
    /// A move that mates at once is returned as soon as it is reached.
    /// Otherwise under-promotions are ignored and every other move scores
    /// `evaluate + jitter - best opponent reply`; moves that allow a mating
    /// reply are discarded and the first strictly highest positive score
    /// wins. When nothing scores above zero the uniformly random move drawn
    /// before the loop is played, even if it allows mate.
    ///
    /// The board is back in its original position when this returns. The
    /// clock is only reported, never used to cut the scan short.
    pub fn select<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
        legal_moves: &[Move],
        clock: &Clock,
    ) -> Result<Selection, SelectError> {
        let fallback = *legal_moves
            .choose(&mut self.rng)
            .ok_or(SelectError::InvalidState("no legal moves to choose from"))?;

        let mut best = Selection {
            mv: fallback,
            score: 0,
            choice: Choice::Fallback,
            nodes: 0,
        };
        let mut nodes = 0u64;
        let mut scored = 0usize;
        let mut mate_discards = 0usize;

        for &mv in legal_moves {
            nodes += 1;
            if is_immediate_mate(board, mv) {
                debug!(mv = %move_to_uci(mv), "playing mate in one");
                return Ok(Selection {
                    mv,
                    score: MATE_SCORE,
                    choice: Choice::Mate,
                    nodes,
                });
            }

            if mv.promotion.is_some_and(|p| p != PieceKind::Queen) {
                continue;
            }

            let mut score = evaluate_move(&*board, &mv) + self.jitter();
            let scan = scan_responses(board, mv);
            nodes += 1 + scan.replies_scanned;
            scored += 1;

            if scan.opponent_has_mate {
                mate_discards += 1;
                trace!(mv = %move_to_uci(mv), "discarded: allows mate in one");
                continue;
            }
            score -= scan.best_reply_value;
            trace!(
                mv = %move_to_uci(mv),
                score,
                best_reply = scan.best_reply_value,
                "candidate"
            );

            if score > best.score {
                best = Selection {
                    mv,
                    score,
                    choice: Choice::Scored,
                    nodes: 0,
                };
            }
        }

        best.nodes = nodes;
        if best.choice == Choice::Fallback && scored > 0 && mate_discards == scored {
            warn!(
                mv = %move_to_uci(best.mv),
                "every candidate allows mate in one, playing random fallback"
            );
        }
        debug!(
            mv = %move_to_uci(best.mv),
            score = best.score,
            choice = ?best.choice,
            nodes,
            elapsed_ms = clock.elapsed().as_millis() as u64,
            "selected move"
        );
        Ok(best)
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
