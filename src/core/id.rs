//! Shoe instance identification.
//!
//! Every shoe gets a process-unique `ShoeId` when it is constructed. The id
//! survives rebuilds and is attached to every log record the shoe emits, so a
//! host running many tables can filter diagnostics per shoe.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_SHOE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a shoe instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShoeId(pub u64);

impl ShoeId {
    /// Allocate the next unused id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SHOE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShoeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shoe({})", self.0)
    }
}
