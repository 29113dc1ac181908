//! Error types for card, deck, and game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),
    /// Symbol is not one of `S`, `H`, `D`, `C`.
    #[error("'{0}' is not a suit symbol")]
    InvalidSuit(char),
}

/// Errors that can occur when parsing a card from its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input string is empty.
    #[error("empty card string")]
    Empty,
    /// The characters after the suit symbol are not a plain decimal number.
    #[error("card rank is not a number")]
    MalformedRank,
    /// The suit or rank was parsed but is not a valid card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck holds fewer cards than requested.
    #[error("cannot deal {requested} cards, only {remaining} left in the deck")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards in the deck at the time of the request.
        remaining: usize,
    },
}
