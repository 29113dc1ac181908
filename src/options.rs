//! Game configuration options.

use crate::card::{Card, Suit};

/// What happens to the current hand when the deck is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum NewDeckPolicy {
    /// Keep the current hand, even though its cards may also be in the new
    /// deck.
    #[default]
    KeepHand,
    /// Deal a fresh hand from the new deck.
    Redeal,
}

/// Configuration options for a [`Game`](crate::Game).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardhand::{GameOptions, NewDeckPolicy};
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_shuffle_new_decks(true)
///     .with_new_deck_policy(NewDeckPolicy::Redeal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt into each hand.
    pub hand_size: usize,
    /// Whether a new deck is shuffled before anything is dealt from it.
    pub shuffle_new_decks: bool,
    /// Hand handling when the deck is replaced.
    pub new_deck_policy: NewDeckPolicy,
    /// Suit whose cards are listed in a hand report.
    pub report_suit: Suit,
    /// Card looked for in a hand report.
    pub special_card: Card,
    /// Exact suit count that makes a hand a flush in a hand report.
    pub flush_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            shuffle_new_decks: false,
            new_deck_policy: NewDeckPolicy::KeepHand,
            report_suit: Suit::Hearts,
            special_card: Card::QUEEN_OF_SPADES,
            flush_size: 5,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether new decks are shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_new_decks(true);
    /// assert!(options.shuffle_new_decks);
    /// ```
    #[must_use]
    pub const fn with_shuffle_new_decks(mut self, shuffle: bool) -> Self {
        self.shuffle_new_decks = shuffle;
        self
    }

    /// Sets what happens to the hand when the deck is replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::{GameOptions, NewDeckPolicy};
    ///
    /// let options = GameOptions::default().with_new_deck_policy(NewDeckPolicy::Redeal);
    /// assert_eq!(options.new_deck_policy, NewDeckPolicy::Redeal);
    /// ```
    #[must_use]
    pub const fn with_new_deck_policy(mut self, policy: NewDeckPolicy) -> Self {
        self.new_deck_policy = policy;
        self
    }

    /// Sets the suit listed in hand reports.
    #[must_use]
    pub const fn with_report_suit(mut self, suit: Suit) -> Self {
        self.report_suit = suit;
        self
    }

    /// Sets the card looked for in hand reports.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::{Card, GameOptions, Suit};
    ///
    /// let ace = Card::new(Suit::Hearts, 1).unwrap();
    /// let options = GameOptions::default().with_special_card(ace);
    /// assert_eq!(options.special_card, ace);
    /// ```
    #[must_use]
    pub const fn with_special_card(mut self, card: Card) -> Self {
        self.special_card = card;
        self
    }

    /// Sets the suit count that makes a flush in hand reports.
    #[must_use]
    pub const fn with_flush_size(mut self, size: usize) -> Self {
        self.flush_size = size;
        self
    }
}
