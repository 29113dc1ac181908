//! Summary of a hand as shown by a front end.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::options::GameOptions;

/// Everything a front end displays about the current hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandReport {
    /// Display string of the hand.
    pub hand: String,
    /// Sum of the card ranks.
    pub sum: u32,
    /// The suit whose cards are listed in `suit_cards`.
    pub suit: Suit,
    /// Cards of `suit`, each preceded by a space.
    pub suit_cards: String,
    /// The card that was looked for.
    pub special_card: Card,
    /// Whether the hand holds `special_card`.
    pub has_special_card: bool,
    /// The suit count checked for a flush.
    pub flush_size: usize,
    /// Whether some suit has exactly `flush_size` cards.
    pub is_flush: bool,
}

impl HandReport {
    /// Builds a report for `hand` using the checks configured in `options`.
    #[must_use]
    pub fn from_hand(hand: &Hand, options: &GameOptions) -> Self {
        Self {
            hand: hand.to_string(),
            sum: hand.sum(),
            suit: options.report_suit,
            suit_cards: hand.cards_of_suit(options.report_suit),
            special_card: options.special_card,
            has_special_card: hand.contains_card(&options.special_card),
            flush_size: options.flush_size,
            is_flush: hand.has_flush_of_size(options.flush_size),
        }
    }
}
