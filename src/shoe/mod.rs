//! The shoe: combined decks dealt one card at a time.
//!
//! ## Key Types
//!
//! - `Shoe`: Owns the shuffled cards, deals from the top, rebuilds at the cut card
//! - `ShoeStats`: Build, shuffle and deal counters
//! - `ShoeSnapshot`: Serializable checkpoint of a shoe, RNG included
//! - `Composition`, `IntegrityFault`: Multiset checks run after every build and shuffle

pub mod integrity;
pub mod multi_deck;
pub mod snapshot;
pub mod stats;

pub use integrity::{verify_fresh_shoe, verify_same_multiset, Composition, IntegrityFault};
pub use multi_deck::Shoe;
pub use snapshot::ShoeSnapshot;
pub use stats::ShoeStats;
