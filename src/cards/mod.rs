//! Card value type.
//!
//! ## Key Types
//!
//! - `Suit`: One of four suits
//! - `Rank`: One of thirteen ranks, Two through Ace
//! - `Card`: Immutable `(rank, suit)` pair
//! - `CardParseError`: Failure to parse the `Ah` / `Td` short form

pub mod card;

pub use card::{Card, CardParseError, Rank, Suit};
