//! Per-turn clock handed to engines.
//!
//! The clock is read-only from an engine's point of view: it reports how long
//! the current turn has been running and how much of its budget is left.

use std::time::{Duration, Instant};

/// Time budget for a single move.
#[derive(Debug, Clone)]
pub struct Clock {
    /// When the turn started
    started: Instant,
    /// Time allowed for this move (None = infinite)
    budget: Option<Duration>,
}

impl Clock {
    /// Start a clock now with the given budget.
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Clock without a time limit.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Get elapsed time since the turn started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let budget = self.budget?;
        Some(budget.saturating_sub(self.elapsed()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() == Some(Duration::ZERO)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
