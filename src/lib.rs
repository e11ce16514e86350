//! A playing-card deck library with optional `no_std` support.
//!
//! The crate provides [`Card`] values with a reassignable worth, and a
//! [`Deck`] that builds shuffled multi-deck shoes, deals and discards from
//! either end, and keeps simple bookkeeping counters.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions, Side};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let mut shoe = deck.create_deck(1).unwrap();
//! let card = deck.deal_card(&mut shoe, Side::Top).unwrap();
//! assert_eq!(shoe.len(), 51);
//! assert_eq!(deck.dealt_cards, 1);
//! let _ = card.render();
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
pub mod options;
pub mod render;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_WORTH, MIN_WORTH, Rank, Suit};
pub use deck::{Deck, Shoe, Side, composition, standard_deck};
pub use error::{CardError, DeckError, ParseSideError};
pub use options::DeckOptions;
