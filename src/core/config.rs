//! Shoe configuration.
//!
//! A shoe is configured once, at construction, by a `ShoeConfig`:
//! - `decks_per_shoe`: how many 52-card decks are combined
//! - `cut_card`: where the cut card sits, as a fraction of the full shoe or
//!   as an absolute remaining count
//!
//! The defaults reproduce the common six-deck shoe with the cut card placed
//! at 25% penetration from the end: `6 × 52 × 0.25 = 78` cards.

use serde::{Deserialize, Serialize};

use crate::error::ShoeError;

/// Cards in one standard deck (4 suits × 13 ranks).
pub const CARDS_PER_DECK: usize = 52;

/// Decks in a standard shoe.
pub const DEFAULT_DECKS_PER_SHOE: usize = 6;

/// Largest shoe accepted by `ShoeConfig::validate`.
///
/// Real shoes hold at most eight decks; this leaves headroom for simulations
/// while keeping `decks × 52` far from overflow and allocations bounded.
pub const MAX_DECKS_PER_SHOE: usize = 1024;

/// Fraction of the full shoe left behind the cut card.
///
/// With six decks this is `312 × 0.25 = 78` cards.
pub const DEFAULT_CUT_CARD_FRACTION: f64 = 0.25;

/// Position of the cut card.
///
/// When fewer cards than the resolved threshold remain, the next deal
/// rebuilds and reshuffles the shoe first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CutCard {
    /// Fraction of the full shoe, in `[0, 1]`. Resolved as `floor(total × fraction)`.
    Fraction(f64),
    /// Absolute number of remaining cards.
    Count(usize),
}

impl Default for CutCard {
    fn default() -> Self {
        CutCard::Fraction(DEFAULT_CUT_CARD_FRACTION)
    }
}

/// Configuration for a shoe. Fixed for the lifetime of the shoe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoeConfig {
    /// Number of 52-card decks combined into the shoe (at least 1).
    pub decks_per_shoe: usize,

    /// Cut card placement.
    pub cut_card: CutCard,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            decks_per_shoe: DEFAULT_DECKS_PER_SHOE,
            cut_card: CutCard::default(),
        }
    }
}

impl ShoeConfig {
    /// Create a config with `decks` decks and the default cut card fraction.
    #[must_use]
    pub fn new(decks: usize) -> Self {
        Self {
            decks_per_shoe: decks,
            ..Self::default()
        }
    }

    /// Place the cut card at a fraction of the full shoe.
    #[must_use]
    pub fn with_cut_card_fraction(mut self, fraction: f64) -> Self {
        self.cut_card = CutCard::Fraction(fraction);
        self
    }

    /// Place the cut card at an absolute remaining count.
    #[must_use]
    pub fn with_cut_card_count(mut self, count: usize) -> Self {
        self.cut_card = CutCard::Count(count);
        self
    }

    /// Deal the shoe down to empty with no automatic rebuild.
    #[must_use]
    pub fn without_cut_card(self) -> Self {
        self.with_cut_card_count(0)
    }

    /// Total cards in a freshly built shoe.
    ///
    /// Saturates for deck counts that `validate` rejects.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks_per_shoe.saturating_mul(CARDS_PER_DECK)
    }

    /// Remaining-card count below which the shoe is rebuilt.
    #[must_use]
    pub fn cut_card_threshold(&self) -> usize {
        match self.cut_card {
            CutCard::Fraction(fraction) => (self.total_cards() as f64 * fraction).floor() as usize,
            CutCard::Count(count) => count,
        }
    }

    /// Check that the configuration describes a usable shoe.
    pub fn validate(&self) -> Result<(), ShoeError> {
        if self.decks_per_shoe == 0 {
            return Err(ShoeError::InvalidConfig(
                "decks_per_shoe must be at least 1".into(),
            ));
        }
        if self.decks_per_shoe > MAX_DECKS_PER_SHOE {
            return Err(ShoeError::InvalidConfig(format!(
                "decks_per_shoe {} exceeds the maximum of {MAX_DECKS_PER_SHOE}",
                self.decks_per_shoe
            )));
        }

        match self.cut_card {
            CutCard::Fraction(fraction) => {
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                    return Err(ShoeError::InvalidConfig(format!(
                        "cut card fraction {fraction} is outside [0, 1]"
                    )));
                }
            }
            CutCard::Count(count) => {
                if count > self.total_cards() {
                    return Err(ShoeError::InvalidConfig(format!(
                        "cut card count {count} exceeds shoe size {}",
                        self.total_cards()
                    )));
                }
            }
        }

        Ok(())
    }
}
