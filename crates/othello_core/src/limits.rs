//! Search limits shared by every engine.
//!
//! Searches are fixed-depth: there is no clock and no stop flag. A caller that
//! needs bounded latency picks a smaller depth before invoking the engine.

use serde::{Deserialize, Serialize};

/// Depth used when the caller does not choose one.
pub const DEFAULT_DEPTH: u8 = 3;

/// Limits that bound a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    /// Create limits with the given depth.
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}
