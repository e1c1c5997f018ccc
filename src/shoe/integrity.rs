//! Consistency checks on shoe contents.
//!
//! A freshly built shoe must hold every `(rank, suit)` pair exactly
//! `decks_per_shoe` times, and a shuffle must leave that multiset untouched.
//! A failed check means the build or shuffle code is broken, so callers
//! treat it as a fault rather than as a game condition.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cards::Card;
use crate::core::config::CARDS_PER_DECK;

/// An internal consistency fault found in a shoe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityFault {
    #[error("expected {expected} cards, found {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("expected {expected} copies of {card}, found {actual}")]
    WrongMultiplicity {
        card: Card,
        expected: usize,
        actual: usize,
    },

    #[error("card multiset changed during shuffle")]
    MultisetChanged,
}

/// Multiset of cards: how many copies of each `(rank, suit)` pair are held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    counts: FxHashMap<Card, usize>,
    total: usize,
}

impl Composition {
    /// Count the cards in a slice.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut counts = FxHashMap::default();
        for &card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        Self {
            counts,
            total: cards.len(),
        }
    }

    /// Copies of `card` held.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    /// Number of distinct `(rank, suit)` pairs held.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of cards held.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Largest number of copies held of any single card.
    #[must_use]
    pub fn max_multiplicity(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Check that `cards` is exactly `decks` complete 52-card decks.
pub fn verify_fresh_shoe(cards: &[Card], decks: usize) -> Result<(), IntegrityFault> {
    let expected = decks * CARDS_PER_DECK;
    if cards.len() != expected {
        return Err(IntegrityFault::WrongSize {
            expected,
            actual: cards.len(),
        });
    }

    // Right size and every pair at exactly `decks` copies implies no strays.
    let composition = Composition::of(cards);
    for card in Card::standard_deck() {
        let actual = composition.count(card);
        if actual != decks {
            return Err(IntegrityFault::WrongMultiplicity {
                card,
                expected: decks,
                actual,
            });
        }
    }

    Ok(())
}

/// Check that `after` holds the same multiset as `before`.
pub fn verify_same_multiset(before: &Composition, after: &[Card]) -> Result<(), IntegrityFault> {
    if before.total() != after.len() {
        return Err(IntegrityFault::WrongSize {
            expected: before.total(),
            actual: after.len(),
        });
    }
    if *before != Composition::of(after) {
        return Err(IntegrityFault::MultisetChanged);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn decks(n: usize) -> Vec<Card> {
        (0..n).flat_map(|_| Card::standard_deck()).collect()
    }

    #[test]
    fn test_composition_counts() {
        let cards = decks(3);
        let composition = Composition::of(&cards);

        assert_eq!(composition.total(), 156);
        assert_eq!(composition.distinct(), 52);
        assert_eq!(composition.max_multiplicity(), 3);
        assert_eq!(composition.count(Card::new(Rank::King, Suit::Hearts)), 3);
    }

    #[test]
    fn test_empty_composition() {
        let composition = Composition::of(&[]);
        assert_eq!(composition.total(), 0);
        assert_eq!(composition.max_multiplicity(), 0);
    }

    #[test]
    fn test_fresh_shoe_passes() {
        assert!(verify_fresh_shoe(&decks(1), 1).is_ok());
        assert!(verify_fresh_shoe(&decks(6), 6).is_ok());
    }

    #[test]
    fn test_fresh_shoe_wrong_size() {
        let mut cards = decks(2);
        cards.pop();

        assert_eq!(
            verify_fresh_shoe(&cards, 2),
            Err(IntegrityFault::WrongSize {
                expected: 104,
                actual: 103
            })
        );
    }

    #[test]
    fn test_fresh_shoe_duplicate_detected() {
        // Right size, but one Ace of Spades replaced by a second Two of Clubs.
        let mut cards = decks(1);
        let last = cards.len() - 1;
        cards[last] = Card::new(Rank::Two, Suit::Clubs);

        let err = verify_fresh_shoe(&cards, 1).unwrap_err();
        assert!(matches!(err, IntegrityFault::WrongMultiplicity { .. }));
    }

    #[test]
    fn test_same_multiset_after_reorder() {
        let cards = decks(2);
        let before = Composition::of(&cards);

        let mut reordered = cards.clone();
        reordered.reverse();

        assert!(verify_same_multiset(&before, &reordered).is_ok());
    }

    #[test]
    fn test_multiset_change_detected() {
        let cards = decks(1);
        let before = Composition::of(&cards);

        let mut changed = cards.clone();
        changed[0] = changed[1];

        assert_eq!(
            verify_same_multiset(&before, &changed),
            Err(IntegrityFault::MultisetChanged)
        );

        changed.pop();
        assert!(matches!(
            verify_same_multiset(&before, &changed),
            Err(IntegrityFault::WrongSize { .. })
        ));
    }
}
