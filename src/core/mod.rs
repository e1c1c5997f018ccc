//! Core building blocks: shoe ids, RNG, configuration.
//!
//! Nothing in here knows about cards; the shoe composes these pieces.

pub mod id;
pub mod rng;
pub mod config;

pub use id::ShoeId;
pub use rng::{GameRng, GameRngState};
pub use config::{
    CutCard, ShoeConfig, CARDS_PER_DECK, DEFAULT_CUT_CARD_FRACTION, DEFAULT_DECKS_PER_SHOE,
    MAX_DECKS_PER_SHOE,
};
