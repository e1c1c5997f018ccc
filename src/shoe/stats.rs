//! Lifetime counters for a shoe.

use serde::{Deserialize, Serialize};

/// Counters a shoe keeps about its own activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeStats {
    /// Times the shoe was built from fresh decks (construction, resets, cut card).
    pub builds: u64,

    /// Shuffles performed, including the one following every build.
    pub shuffles: u64,

    /// Builds triggered by the cut card rather than by construction or reset.
    pub auto_rebuilds: u64,

    /// Cards dealt over the lifetime of the shoe.
    pub cards_dealt: u64,

    /// Cards dealt since the most recent build.
    pub cards_dealt_since_build: u64,
}

impl ShoeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_build(&mut self) {
        self.builds += 1;
        self.cards_dealt_since_build = 0;
    }

    pub(crate) fn record_deal(&mut self) {
        self.cards_dealt += 1;
        self.cards_dealt_since_build += 1;
    }

    /// Average cards dealt per build.
    #[must_use]
    pub fn avg_cards_per_build(&self) -> f64 {
        if self.builds == 0 {
            0.0
        } else {
            self.cards_dealt as f64 / self.builds as f64
        }
    }
}
