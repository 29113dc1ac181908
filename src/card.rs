//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Lowest valid rank (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest valid rank (King).
pub const MAX_RANK: u8 = 13;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the single-letter symbol used in display strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    /// Looks up a suit by its symbol, ignoring case.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Cards are validated on construction, so a `Card` always has a rank in
/// `1..=13` (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// The Queen of Spades.
    pub const QUEEN_OF_SPADES: Self = Self::new_unchecked(Suit::Spades, 12);

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardhand::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Hearts, 4).unwrap();
    /// assert_eq!(card.to_string(), "H4");
    /// assert!(Card::new(Suit::Hearts, 18).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        match rank {
            MIN_RANK..=MAX_RANK => Ok(Self::new_unchecked(suit, rank)),
            _ => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Creates a new card from a suit symbol (`S`, `H`, `D` or `C`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for an unknown symbol and
    /// [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn from_symbol(symbol: char, rank: u8) -> Result<Self, CardError> {
        match Suit::from_symbol(symbol) {
            Some(suit) => Self::new(suit, rank),
            None => Err(CardError::InvalidSuit(symbol)),
        }
    }

    pub(crate) const fn new_unchecked(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(ParseCardError::Empty)?;
        let digits = chars.as_str();
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return Err(ParseCardError::MalformedRank);
        }
        let rank = digits
            .parse::<u8>()
            .map_err(|_| ParseCardError::MalformedRank)?;

        Ok(Self::from_symbol(symbol, rank)?)
    }
}
