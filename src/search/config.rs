//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Expectiminimax configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth budget at the root, in plies (chance nodes count as plies).
    pub depth: u32,

    /// Alpha-beta cutoffs. Disabled, the search visits every node.
    pub pruning: bool,

    /// Skip the search and fill the last open cell when already ahead.
    pub endgame_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            pruning: true,
            endgame_shortcut: true,
        }
    }
}

impl SearchConfig {
    /// Set the root depth budget.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enable or disable the endgame shortcut.
    #[must_use]
    pub fn with_endgame_shortcut(mut self, enabled: bool) -> Self {
        self.endgame_shortcut = enabled;
        self
    }
}
