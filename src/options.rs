//! Deck configuration options.

use crate::deck::Side;

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, Side};
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_side(Side::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of standard decks combined by [`Deck::create_shoe`](crate::Deck::create_shoe).
    pub decks: u8,
    /// End of the shoe used by [`Deck::deal`](crate::Deck::deal) and
    /// [`Deck::discard`](crate::Deck::discard).
    pub side: Side,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            side: Side::Top,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the default side to deal and discard from.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Side};
    ///
    /// let options = DeckOptions::default().with_side(Side::Bottom);
    /// assert_eq!(options.side, Side::Bottom);
    /// ```
    #[must_use]
    pub const fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}
