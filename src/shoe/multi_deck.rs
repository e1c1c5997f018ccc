//! The multi-deck shoe.
//!
//! A `Shoe` owns several standard decks shuffled together and deals them one
//! card at a time from the top. Once fewer cards than the cut card threshold
//! remain, the next deal first rebuilds the shoe from fresh decks and
//! reshuffles it, so play never runs into a near-exhausted pool.
//!
//! ## Usage
//!
//! ```
//! use card_shoe::core::{GameRng, ShoeConfig};
//! use card_shoe::shoe::Shoe;
//!
//! let mut shoe = Shoe::new(ShoeConfig::new(1), GameRng::new(42)).unwrap();
//! assert_eq!(shoe.remaining(), 52);
//!
//! let card = shoe.deal();
//! assert!(card.is_some());
//! assert_eq!(shoe.remaining(), 51);
//! ```

use tracing::{debug, error, info};

use super::integrity::{verify_fresh_shoe, verify_same_multiset, Composition, IntegrityFault};
use super::snapshot::ShoeSnapshot;
use super::stats::ShoeStats;
use crate::cards::Card;
use crate::core::config::ShoeConfig;
use crate::core::id::ShoeId;
use crate::core::rng::GameRng;
use crate::error::ShoeError;

/// A shoe of `decks_per_shoe` combined decks.
///
/// The card sequence is private; index 0 is the bottom of the shoe and the
/// last element is the top, which is where cards are dealt from.
///
/// A shoe is meant to be driven by one game loop. Hosts sharing a shoe across
/// threads must serialize access themselves (a `Mutex<Shoe>` per table).
#[derive(Debug)]
pub struct Shoe {
    id: ShoeId,
    config: ShoeConfig,
    cut_card_threshold: usize,
    cards: Vec<Card>,
    rng: GameRng,
    stats: ShoeStats,
    #[cfg(test)]
    faults: FaultPlan,
}

/// Test-only corruption injected just before the next integrity check.
#[cfg(test)]
#[derive(Debug, Default)]
struct FaultPlan {
    corrupt_next_build: bool,
    corrupt_next_shuffle: bool,
}

#[cfg(test)]
fn inject_fault(armed: &mut bool, cards: &mut Vec<Card>) {
    if std::mem::take(armed) {
        if let Some(&card) = cards.first() {
            cards.push(card);
        }
    }
}

impl Shoe {
    /// Build and shuffle a new shoe.
    ///
    /// Fails if the configuration is invalid or the freshly built shoe does
    /// not pass its integrity check.
    pub fn new(config: ShoeConfig, rng: GameRng) -> Result<Self, ShoeError> {
        config.validate()?;

        let mut shoe = Self {
            id: ShoeId::next(),
            config,
            cut_card_threshold: config.cut_card_threshold(),
            cards: Vec::with_capacity(config.total_cards()),
            rng,
            stats: ShoeStats::new(),
            #[cfg(test)]
            faults: FaultPlan::default(),
        };
        info!(
            shoe = %shoe.id,
            decks = config.decks_per_shoe,
            cut_card_threshold = shoe.cut_card_threshold,
            seed = shoe.rng.seed(),
            "creating shoe"
        );
        shoe.rebuild()?;
        Ok(shoe)
    }

    /// A standard six-deck shoe with the cut card at 78.
    pub fn with_defaults(rng: GameRng) -> Result<Self, ShoeError> {
        Self::new(ShoeConfig::default(), rng)
    }

    /// Deal the top card.
    ///
    /// If fewer cards than the cut card threshold remain, the shoe is rebuilt
    /// and reshuffled first. Returns `None` only when the shoe is still empty
    /// after that check: with no cut card, once every card has been dealt, or
    /// when the rebuild failed its integrity check.
    pub fn deal(&mut self) -> Option<Card> {
        if self.needs_rebuild() {
            info!(
                shoe = %self.id,
                remaining = self.cards.len(),
                cut_card_threshold = self.cut_card_threshold,
                "cut card reached, rebuilding shoe"
            );
            self.stats.auto_rebuilds += 1;
            if self.rebuild().is_err() {
                // Already logged; the shoe is left empty.
                return None;
            }
        }

        let card = self.cards.pop()?;
        self.stats.record_deal();
        debug!(shoe = %self.id, %card, remaining = self.cards.len(), "dealt card");
        Some(card)
    }

    /// Reshuffle the cards currently held without changing which cards they are.
    ///
    /// If the post-shuffle check finds the multiset changed, the shoe is
    /// emptied (to be rebuilt on the next deal) and the fault is returned.
    pub fn shuffle(&mut self) -> Result<(), ShoeError> {
        self.shuffle_cards()?;
        Ok(())
    }

    /// Discard all cards, build fresh decks and shuffle them.
    pub fn reset(&mut self) -> Result<(), ShoeError> {
        info!(shoe = %self.id, remaining = self.cards.len(), "resetting shoe");
        self.rebuild()?;
        Ok(())
    }

    /// True when no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards remaining, always in `0..=capacity()`.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards in a freshly built shoe.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.total_cards()
    }

    /// Remaining count below which the next deal rebuilds the shoe.
    #[must_use]
    pub fn cut_card_threshold(&self) -> usize {
        self.cut_card_threshold
    }

    /// True when the next deal will rebuild the shoe first.
    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        self.cards.len() < self.cut_card_threshold
    }

    /// Fraction of the current shoe already dealt.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        1.0 - self.cards.len() as f64 / self.capacity() as f64
    }

    #[must_use]
    pub fn config(&self) -> &ShoeConfig {
        &self.config
    }

    #[must_use]
    pub fn id(&self) -> ShoeId {
        self.id
    }

    #[must_use]
    pub fn stats(&self) -> &ShoeStats {
        &self.stats
    }

    /// Capture the full shoe state, RNG included.
    ///
    /// A shoe restored from the snapshot deals the same future sequence.
    #[must_use]
    pub fn snapshot(&self) -> ShoeSnapshot {
        ShoeSnapshot {
            config: self.config,
            cards: self.cards.clone(),
            rng: self.rng.state(),
            stats: self.stats,
        }
    }

    /// Recreate a shoe from a snapshot.
    ///
    /// The restored shoe gets a new `ShoeId`. Fails if the configuration is
    /// invalid or the cards could not have come from a shoe of that size.
    pub fn restore(snapshot: ShoeSnapshot) -> Result<Self, ShoeError> {
        let ShoeSnapshot {
            config,
            cards,
            rng,
            stats,
        } = snapshot;
        config.validate()?;

        if cards.len() > config.total_cards() {
            return Err(ShoeError::Snapshot(format!(
                "{} cards exceed shoe capacity {}",
                cards.len(),
                config.total_cards()
            )));
        }
        let max_copies = Composition::of(&cards).max_multiplicity();
        if max_copies > config.decks_per_shoe {
            return Err(ShoeError::Snapshot(format!(
                "{max_copies} copies of one card in a {}-deck shoe",
                config.decks_per_shoe
            )));
        }

        let shoe = Self {
            id: ShoeId::next(),
            config,
            cut_card_threshold: config.cut_card_threshold(),
            cards,
            rng: GameRng::from_state(&rng),
            stats,
            #[cfg(test)]
            faults: FaultPlan::default(),
        };
        info!(shoe = %shoe.id, remaining = shoe.cards.len(), "restored shoe from snapshot");
        Ok(shoe)
    }

    /// Build fresh decks, then shuffle.
    fn rebuild(&mut self) -> Result<(), IntegrityFault> {
        self.build()?;
        self.shuffle_cards()
    }

    /// Replace the held cards with `decks_per_shoe` fresh decks in enumeration order.
    fn build(&mut self) -> Result<(), IntegrityFault> {
        let decks = self.config.decks_per_shoe;

        self.cards.clear();
        for _ in 0..decks {
            self.cards.extend(Card::standard_deck());
        }
        self.stats.record_build();

        #[cfg(test)]
        inject_fault(&mut self.faults.corrupt_next_build, &mut self.cards);

        if let Err(fault) = verify_fresh_shoe(&self.cards, decks) {
            error!(shoe = %self.id, %fault, "freshly built shoe failed integrity check");
            self.cards.clear();
            return Err(fault);
        }

        info!(shoe = %self.id, decks, cards = self.cards.len(), "built shoe");
        Ok(())
    }

    fn shuffle_cards(&mut self) -> Result<(), IntegrityFault> {
        let before = Composition::of(&self.cards);
        self.rng.shuffle(&mut self.cards);
        self.stats.shuffles += 1;

        #[cfg(test)]
        inject_fault(&mut self.faults.corrupt_next_shuffle, &mut self.cards);

        if let Err(fault) = verify_same_multiset(&before, &self.cards) {
            error!(shoe = %self.id, %fault, "shuffle changed shoe contents");
            self.cards.clear();
            return Err(fault);
        }

        info!(shoe = %self.id, cards = self.cards.len(), "shuffled shoe");
        Ok(())
    }
}
