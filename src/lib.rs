//! A playing card deck and hand model with optional `no_std` support.
//!
//! [`Card`] is a validated suit and rank, [`Deck`] is shuffled and dealt from
//! with a caller-supplied random number generator, and [`Hand`] answers
//! read-only questions about the cards dealt into it. [`Game`] ties them
//! together behind a seeded generator.
//!
//! # Example
//!
//! ```
//! use cardhand::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42).unwrap();
//! let report = game.report();
//! assert_eq!(report.sum, game.hand().sum());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod report;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, ParseCardError};
pub use game::Game;
pub use hand::Hand;
pub use options::{GameOptions, NewDeckPolicy};
pub use report::HandReport;
