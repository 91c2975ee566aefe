//! Search node kinds and their transitions.
//!
//! ```text
//! MAX (root) -> MIN -> CHANCE-MAX -> MAX -> CHANCE-MIN -> MIN -> CHANCE-MAX -> ...
//! ```
//!
//! The root MAX goes straight to MIN: nobody has drawn yet. Every later MAX
//! is followed by the opponent's draw (CHANCE-MIN) before their MIN turn,
//! and every MIN by our own draw (CHANCE-MAX) before our next MAX turn.

use serde::{Deserialize, Serialize};

/// The four node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Our move.
    Max,
    /// Opponent's move.
    Min,
    /// Our draw, then our move.
    ChanceMax,
    /// Opponent's draw, then their move.
    ChanceMin,
}

impl NodeKind {
    /// The kind of node below this one. `at_root` only matters for `Max`.
    #[must_use]
    pub const fn child(self, at_root: bool) -> NodeKind {
        match self {
            NodeKind::Max if at_root => NodeKind::Min,
            NodeKind::Max => NodeKind::ChanceMin,
            NodeKind::Min => NodeKind::ChanceMax,
            NodeKind::ChanceMax => NodeKind::Max,
            NodeKind::ChanceMin => NodeKind::Min,
        }
    }

    /// Whether this node averages over draws.
    #[must_use]
    pub const fn is_chance(self) -> bool {
        matches!(self, NodeKind::ChanceMax | NodeKind::ChanceMin)
    }

    /// Whether this node (or the draw it models) belongs to the searching side.
    #[must_use]
    pub const fn is_ours(self) -> bool {
        matches!(self, NodeKind::Max | NodeKind::ChanceMax)
    }
}
