pub mod board;
pub mod error;
pub mod game;
pub mod limits;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use limits::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Othello engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the side to move must pass)
    pub best_move: Option<Move>,
    /// Evaluation score from the searching side's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all Othello engines must implement.
///
/// This allows swapping between search engines and trivial baselines in the
/// match runner.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports and logs
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-othello"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
