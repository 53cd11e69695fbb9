//! Depth-limited search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for depth-limited search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the root's own move before the heuristic
    /// takes over. `0` scores each root move directly.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}
