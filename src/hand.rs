//! Hand representation and queries.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};

fn count_suits(cards: &[Card]) -> [usize; 4] {
    let mut counts = [0; 4];
    for card in cards {
        counts[card.suit().index()] += 1;
    }
    counts
}

/// A fixed set of cards dealt from a deck.
///
/// A hand never changes after creation; every query is evaluated over the
/// cards it was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards, in order.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the ranks of every card.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.rank())).sum()
    }

    /// Display strings of every card of `suit`, each preceded by a space.
    ///
    /// ```
    /// use cardhand::{Card, Hand, Suit};
    ///
    /// let hand: Hand = ["H1", "D3", "H2"]
    ///     .iter()
    ///     .map(|s| s.parse::<Card>().unwrap())
    ///     .collect();
    /// assert_eq!(hand.cards_of_suit(Suit::Hearts), " H1 H2");
    /// assert_eq!(hand.cards_of_suit(Suit::Clubs), "");
    /// ```
    #[must_use]
    pub fn cards_of_suit(&self, suit: Suit) -> String {
        let mut out = String::new();
        for card in self.cards.iter().filter(|c| c.suit() == suit) {
            out.push(' ');
            out.push_str(&card.to_string());
        }
        out
    }

    /// Returns whether the hand holds the card with this suit and rank.
    #[must_use]
    pub fn contains(&self, suit: Suit, rank: u8) -> bool {
        self.cards
            .iter()
            .any(|c| c.suit() == suit && c.rank() == rank)
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains_card(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Number of cards of `suit` in the hand.
    #[must_use]
    pub fn suit_count(&self, suit: Suit) -> usize {
        count_suits(&self.cards)[suit.index()]
    }

    /// Returns whether some suit in the hand has exactly `size` cards.
    ///
    /// Only suits that appear in the hand are considered, so a size of zero
    /// never matches.
    #[must_use]
    pub fn has_flush_of_size(&self, size: usize) -> bool {
        count_suits(&self.cards)
            .iter()
            .any(|&count| count > 0 && count == size)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        Ok(())
    }
}
