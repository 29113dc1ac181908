//! A deck of cards that can be shuffled and dealt from.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DealError;

/// An owned, mutable collection of cards.
///
/// Randomness is always supplied by the caller, so a seeded generator makes
/// shuffling and dealing reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck.
    ///
    /// Cards are ordered by suit (Spades, Hearts, Diamonds, Clubs) and then by
    /// rank from Ace to King.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new_unchecked(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::trace!(cards = self.cards.len(), "shuffled deck");
    }

    /// Removes `count` cards chosen uniformly at random and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the deck holds fewer than
    /// `count` cards. The deck is left untouched in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let mut deck = Deck::standard();
    /// let dealt = deck.deal(5, &mut rng).unwrap();
    /// assert_eq!(dealt.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// ```
    pub fn deal<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if count > remaining {
            tracing::warn!(requested = count, remaining, "refused to deal");
            return Err(DealError::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.random_range(0..self.cards.len());
            dealt.push(self.cards.swap_remove(index));
        }

        tracing::debug!(dealt = count, remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }

    /// Returns the cards still in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        Ok(())
    }
}
