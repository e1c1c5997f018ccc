//! # card-shoe
//!
//! A multi-deck card shoe for casino-style card games.
//!
//! ## Design Principles
//!
//! 1. **Fair**: Unbiased Fisher–Yates shuffling over an injected, seedable RNG.
//!    Same seed, same shoe.
//!
//! 2. **Self-Replenishing**: When fewer cards than the cut card threshold
//!    remain, the next deal rebuilds and reshuffles the shoe. Callers never
//!    manage the shoe lifecycle beyond an optional `reset`.
//!
//! 3. **Checked**: Every build and shuffle is verified against the expected
//!    card multiset. A corrupted shoe is never dealt from.
//!
//! ## Usage
//!
//! ```
//! use card_shoe::{GameRng, Shoe, ShoeConfig};
//!
//! // Six decks, cut card at 78.
//! let mut shoe = Shoe::new(ShoeConfig::default(), GameRng::new(7)).unwrap();
//!
//! for _ in 0..(312 - 78) {
//!     assert!(shoe.deal().is_some());
//! }
//! assert_eq!(shoe.remaining(), 78);
//!
//! // Still at the threshold: deals normally.
//! shoe.deal();
//! assert_eq!(shoe.remaining(), 77);
//!
//! // Below it: rebuilt before dealing.
//! shoe.deal();
//! assert_eq!(shoe.remaining(), 311);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`, tagged with the shoe's `ShoeId`. The
//! crate never installs a subscriber.
//!
//! ## Modules
//!
//! - `core`: Shoe ids, RNG, configuration
//! - `cards`: Card value type
//! - `shoe`: The shoe, its integrity checks, stats and snapshots
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod shoe;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CutCard, GameRng, GameRngState, ShoeConfig, ShoeId, CARDS_PER_DECK,
    DEFAULT_CUT_CARD_FRACTION, DEFAULT_DECKS_PER_SHOE, MAX_DECKS_PER_SHOE,
};

pub use crate::cards::{Card, CardParseError, Rank, Suit};

pub use crate::shoe::{Composition, IntegrityFault, Shoe, ShoeSnapshot, ShoeStats};

pub use crate::error::ShoeError;
