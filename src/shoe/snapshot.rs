//! Serializable shoe checkpoints.
//!
//! A `ShoeSnapshot` captures everything needed to resume a shoe: its
//! configuration, the remaining cards in order, the RNG position and the
//! counters. It round-trips through any serde format; `to_bytes` and
//! `from_bytes` use bincode.

use serde::{Deserialize, Serialize};

use super::stats::ShoeStats;
use crate::cards::Card;
use crate::core::config::ShoeConfig;
use crate::core::rng::GameRngState;
use crate::error::ShoeError;

/// Captured state of a shoe. Produced by `Shoe::snapshot`, consumed by `Shoe::restore`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoeSnapshot {
    pub config: ShoeConfig,
    /// Remaining cards, bottom first.
    pub cards: Vec<Card>,
    pub rng: GameRngState,
    pub stats: ShoeStats,
}

impl ShoeSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ShoeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot previously produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ShoeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use crate::shoe::Shoe;

    #[test]
    fn test_bytes_round_trip() {
        let mut shoe = Shoe::new(ShoeConfig::new(2), GameRng::new(3)).unwrap();
        for _ in 0..10 {
            shoe.deal();
        }

        let snapshot = shoe.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let decoded = ShoeSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(snapshot, decoded);
        assert_eq!(decoded.cards.len(), 94);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = ShoeSnapshot::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, ShoeError::Snapshot(_)));
    }
}
