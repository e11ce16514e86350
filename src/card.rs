//! Card types and the fixed suit/rank tables.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest worth a card may be assigned.
pub const MIN_WORTH: u8 = 1;

/// Highest worth a card may be assigned (an ace played high).
pub const MAX_WORTH: u8 = 11;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }

    /// Returns the upper-case suit name used in textual input.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "SPADE",
            Self::Hearts => "HEART",
            Self::Diamonds => "DIAMOND",
            Self::Clubs => "CLUB",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses either the glyph (`"♠"`) or the name (`"SPADE"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| s.chars().eq(core::iter::once(suit.symbol())) || s == suit.name())
            .ok_or(CardError::InvalidSuit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, in deck-building order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the printed rank symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the worth a fresh card of this rank starts with.
    ///
    /// Aces are worth 1, number cards their face value and court cards 10.
    #[must_use]
    pub const fn default_worth(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    /// Parses a rank symbol.
    ///
    /// Blank input or input padded with whitespace is not a symbol at all and
    /// yields [`CardError::InvalidType`]; any other unknown text yields
    /// [`CardError::InvalidValue`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.trim() != s {
            return Err(CardError::InvalidType);
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or(CardError::InvalidValue)
    }
}

/// A playing card.
///
/// Suit and rank are fixed at construction. The worth starts at
/// [`Rank::default_worth`] and can be reassigned within
/// [`MIN_WORTH`]`..=`[`MAX_WORTH`] to model rule variants such as a high ace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    worth: u8,
}

impl Card {
    /// Creates a new card with its table worth.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            worth: rank.default_worth(),
        }
    }

    /// Creates a card from textual suit and value symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::from_symbols("\u{2665}", "Q").unwrap();
    /// assert_eq!(card.suit(), Suit::Hearts);
    /// assert_eq!(card.value(), Rank::Queen);
    /// assert_eq!(card.worth(), 10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for an unknown suit, and
    /// [`CardError::InvalidValue`] or [`CardError::InvalidType`] for a value
    /// that is not one of the thirteen rank symbols.
    pub fn from_symbols(suit: &str, value: &str) -> Result<Self, CardError> {
        let suit = suit.parse::<Suit>()?;
        let rank = value.parse::<Rank>()?;
        Ok(Self::new(suit, rank))
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn value(&self) -> Rank {
        self.rank
    }

    /// Returns the current worth of the card.
    #[must_use]
    pub const fn worth(&self) -> u8 {
        self.worth
    }

    /// Reassigns the worth of the card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::OutOfRange`] if `new_worth` is outside
    /// `1..=11`. The worth is left unchanged on error.
    pub fn set_worth(&mut self, new_worth: i64) -> Result<(), CardError> {
        let worth = u8::try_from(new_worth).map_err(|_| CardError::OutOfRange)?;
        if !(MIN_WORTH..=MAX_WORTH).contains(&worth) {
            return Err(CardError::OutOfRange);
        }
        self.worth = worth;
        Ok(())
    }

    /// Reassigns the worth from text, e.g. user input.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidType`] if `new_worth` is not an integer,
    /// otherwise behaves like [`Card::set_worth`].
    pub fn set_worth_str(&mut self, new_worth: &str) -> Result<(), CardError> {
        let worth = new_worth
            .parse::<i64>()
            .map_err(|_| CardError::InvalidType)?;
        self.set_worth(worth)
    }

    /// Restores the table worth of the card's rank.
    pub const fn reset_worth(&mut self) {
        self.worth = self.rank.default_worth();
    }

    /// Renders the card as a 5-line ASCII box.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let lines = Card::new(Suit::Spades, Rank::Ten).render();
    /// assert_eq!(lines[0], "|=====|");
    /// assert_eq!(lines[1], "| 10  |");
    /// assert_eq!(lines[3], "|   \u{2660} |");
    /// ```
    #[must_use]
    pub fn render(&self) -> [String; 5] {
        crate::render::render_card(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
