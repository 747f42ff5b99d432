//! Minimax Othello Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a positional,
//! stability, and mobility evaluation. Every score is from the perspective of
//! the side that started the search.

mod eval;
mod search;

use othello_core::{Engine, Position, SearchLimits, SearchResult};
use serde::{Deserialize, Serialize};

/// Engine options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Split the root moves across the rayon pool
    pub parallel: bool,
}

/// Othello engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax, no iterative deepening or time cutoffs
/// - Positional weights, edge-ray stability, and mobility evaluation
/// - Row-major move order, so ties go to the earliest square
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: MinimaxConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(MinimaxConfig::default())
    }

    pub fn with_config(config: MinimaxConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn parallel() -> Self {
        Self::with_config(MinimaxConfig { parallel: true })
    }

    pub fn config(&self) -> MinimaxConfig {
        self.config
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let (score, best_move) = if self.config.parallel {
            let (score, mv, nodes) =
                search::pick_best_move_parallel(&pos.board, pos.side_to_move, limits.depth);
            self.nodes = nodes;
            (score, mv)
        } else {
            search::pick_best_move(&pos.board, pos.side_to_move, limits.depth, &mut self.nodes)
        };

        SearchResult {
            best_move,
            score,
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        if self.config.parallel {
            "Minimax v1.0 (parallel)"
        } else {
            "Minimax v1.0"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{
    evaluate, is_stable, mobility, positional, stability, POSITION_WEIGHTS, STABILITY_BONUS,
};
pub use search::{
    minimax, pick_best_move, pick_best_move_parallel, select_move, DEFAULT_DEPTH, NEG_INF, POS_INF,
};
