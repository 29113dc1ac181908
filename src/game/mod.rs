//! Game orchestrator owning the current deck and hand.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::{GameOptions, NewDeckPolicy};
use crate::report::HandReport;
use crate::sync::{Guarded, Mutex};

/// Everything an operation reads or writes, kept under one lock so the deck
/// and hand never share a card.
struct Table {
    /// Cards not yet dealt.
    deck: Deck,
    /// The current hand.
    hand: Hand,
    /// Random number generator used for shuffling and dealing.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a standard deck, shuffled if asked to.
    fn fresh_deck(&mut self, shuffle: bool) -> Deck {
        let mut deck = Deck::standard();
        if shuffle {
            deck.shuffle(&mut self.rng);
        }
        deck
    }
}

/// Owns one deck and one hand and replaces either on demand.
///
/// Every operation takes `&self` and holds the game's lock until it returns,
/// so a single game can be shared by the handlers of an event-driven front
/// end.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new game with the given seed and deals the first hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if `options.hand_size` exceeds
    /// the size of a standard deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.hand().len(), 5);
    /// assert_eq!(game.cards_remaining(), 47);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let game = Self {
            options,
            table: Mutex::new(Table {
                deck: Deck::standard(),
                hand: Hand::default(),
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
        };
        game.new_game()?;
        Ok(game)
    }

    /// Replaces the deck with a fresh one and deals a new hand from it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the hand size exceeds a
    /// full deck. Neither the deck nor the hand is changed in that case.
    pub fn new_game(&self) -> Result<(), DealError> {
        self.table.with(|table| -> Result<(), DealError> {
            let mut deck = table.fresh_deck(self.options.shuffle_new_decks);
            let cards = deck.deal(self.options.hand_size, &mut table.rng)?;

            table.deck = deck;
            table.hand = Hand::new(cards);
            tracing::debug!(hand = %table.hand, "started new game");
            Ok(())
        })
    }

    /// Replaces the deck with a fresh one.
    ///
    /// With [`NewDeckPolicy::KeepHand`] the current hand is left as it is and
    /// may share cards with the new deck. With [`NewDeckPolicy::Redeal`] a new
    /// hand is dealt from the new deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if a redeal is required and
    /// the hand size exceeds a full deck. Nothing is changed in that case.
    pub fn new_deck(&self) -> Result<(), DealError> {
        self.table.with(|table| -> Result<(), DealError> {
            let mut deck = table.fresh_deck(self.options.shuffle_new_decks);

            match self.options.new_deck_policy {
                NewDeckPolicy::KeepHand => {
                    tracing::debug!("replaced deck, keeping hand");
                }
                NewDeckPolicy::Redeal => {
                    let cards = deck.deal(self.options.hand_size, &mut table.rng)?;
                    table.hand = Hand::new(cards);
                    tracing::debug!(hand = %table.hand, "replaced deck and redealt");
                }
            }

            table.deck = deck;
            Ok(())
        })
    }

    /// Deals a new hand from the current deck.
    ///
    /// The cards of the previous hand are not returned to the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the deck holds fewer cards
    /// than the hand size. The deck and the previous hand are left unchanged.
    pub fn new_hand(&self) -> Result<(), DealError> {
        self.table.with(|table| -> Result<(), DealError> {
            let cards = table
                .deck
                .deal(self.options.hand_size, &mut table.rng)?;

            table.hand = Hand::new(cards);
            tracing::debug!(hand = %table.hand, remaining = table.deck.len(), "dealt new hand");
            Ok(())
        })
    }

    /// Returns a copy of the current hand.
    pub fn hand(&self) -> Hand {
        self.table.with(|table| table.hand.clone())
    }

    /// Returns a copy of the current deck.
    pub fn deck(&self) -> Deck {
        self.table.with(|table| table.deck.clone())
    }

    /// Returns copies of the deck and the hand, taken together.
    pub fn snapshot(&self) -> (Deck, Hand) {
        self.table
            .with(|table| (table.deck.clone(), table.hand.clone()))
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.with(|table| table.deck.len())
    }

    /// Summarizes the current hand using the checks configured in the options.
    pub fn report(&self) -> HandReport {
        self.table
            .with(|table| HandReport::from_hand(&table.hand, &self.options))
    }
}
