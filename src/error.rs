//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur when building or mutating a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit is not one of the four canonical suits.
    #[error("card does not have a valid suit")]
    InvalidSuit,
    /// Value is not one of the thirteen canonical ranks.
    #[error("card does not have a valid value")]
    InvalidValue,
    /// Input is not of the expected kind (not a rank symbol, not an integer).
    #[error("card input has an invalid type")]
    InvalidType,
    /// Worth is outside `1..=11`.
    #[error("worth must be between 1 and 11")]
    OutOfRange,
}

/// Errors that can occur when building a shoe or taking cards from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyDeck,
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    ZeroDecks,
}

/// Error returned when parsing a [`Side`](crate::Side) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("side must be \"top\" or \"bottom\"")]
pub struct ParseSideError;
