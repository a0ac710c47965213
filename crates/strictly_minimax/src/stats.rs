//! Node counters collected while searching.

use serde::{Deserialize, Serialize};

/// Counters accumulated by a [`Searcher`](crate::Searcher) across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, terminal or not.
    pub nodes: u64,
    /// Terminal boards scored by utility.
    pub leaves: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} leaves, {} cutoffs",
            self.nodes, self.leaves, self.cutoffs
        )
    }
}
