//! The playing card value type.
//!
//! `Card` is an immutable `(rank, suit)` pair with structural equality. Shoes
//! hold several copies of each card, so a `Card` carries no identity of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::CARDS_PER_DECK;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Card rank, Two through Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in enumeration order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// One standard 52-card deck: suits outer, ranks inner, in enumeration order.
    ///
    /// ```
    /// use card_shoe::cards::{Card, Rank, Suit};
    ///
    /// let deck: Vec<Card> = Card::standard_deck().collect();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[0], Card::new(Rank::Two, Suit::Clubs));
    /// assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Spades));
    /// ```
    pub fn standard_deck() -> impl Iterator<Item = Card> + Clone {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Short form: `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Failure to parse a card from its short form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card must be exactly two characters, got {0:?}")]
    BadLength(String),

    #[error("invalid rank {0:?}")]
    BadRank(char),

    #[error("invalid suit {0:?}")]
    BadSuit(char),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::BadLength(s.to_string()));
        };

        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == r_ch.to_ascii_uppercase())
            .ok_or(CardParseError::BadRank(r_ch))?;

        let suit = Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == s_ch.to_ascii_lowercase())
            .ok_or(CardParseError::BadSuit(s_ch))?;

        Ok(Card::new(rank, suit))
    }
}

const _: () = assert!(Suit::ALL.len() * Rank::ALL.len() == CARDS_PER_DECK);
