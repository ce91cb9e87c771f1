pub mod attacks;
pub mod board;
pub mod error;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::ChessError;
pub use time_control::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait — implemented by every move-selection engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move to play (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen move from the engine's perspective
    pub score: i32,
    /// Number of positions visited (for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// This lets a harness (UCI loop, match runner) drive any engine the same way.
pub trait Engine: Send {
    /// Pick a move for the side to move in `pos`.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `clock` - Time budget for this move
    ///
    /// # Returns
    /// SearchResult containing the chosen move and statistics
    fn search(&mut self, pos: &Position, clock: &Clock) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
