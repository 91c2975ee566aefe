//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use super::node::NodeKind;

/// Statistics collected during one `consider_turn`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deterministic nodes for the searching side.
    pub max_nodes: u64,

    /// Deterministic nodes for the opponent.
    pub min_nodes: u64,

    /// Chance nodes (either side's draw).
    pub chance_nodes: u64,

    /// Static evaluations (terminal, depth-exhausted or moveless nodes).
    pub leaves: u64,

    /// Sibling expansions skipped by alpha-beta.
    pub cutoffs: u64,

    /// The endgame shortcut answered without searching.
    pub shortcut: bool,

    /// Total time spent (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::Max => self.max_nodes += 1,
            NodeKind::Min => self.min_nodes += 1,
            NodeKind::ChanceMax | NodeKind::ChanceMin => self.chance_nodes += 1,
        }
    }

    /// Every node entered, leaves included.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.max_nodes + self.min_nodes + self.chance_nodes
    }

    /// Nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes() as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
