//! Shoe construction and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, ParseSideError};
use crate::options::DeckOptions;

/// The live sequence of cards. The front is the top of the shoe.
pub type Shoe = VecDeque<Card>;

/// End of the shoe to take a card from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Front of the shoe.
    #[default]
    Top,
    /// Back of the shoe.
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseSideError),
        }
    }
}

/// Builds shoes and keeps deal/discard bookkeeping.
///
/// The shoe itself is owned by the caller and passed in to [`Deck::deal_card`]
/// and [`Deck::discard_card`]. The counters are plain public fields: callers
/// may overwrite them at any time, and `deck_cards` is a capacity marker set
/// by [`Deck::create_deck`] rather than a live count.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Nominal size of the last shoe built (`52 × decks`).
    pub deck_cards: usize,
    /// Number of cards dealt.
    pub dealt_cards: usize,
    /// Number of cards discarded.
    pub discarded_cards: usize,
    /// Deck options.
    pub options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with zeroed counters and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.dealt_cards, 0);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self {
            deck_cards: 0,
            dealt_cards: 0,
            discarded_cards: 0,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a shuffled shoe of `count` standard decks.
    ///
    /// Sets `deck_cards` to `count × 52`; the other counters are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ZeroDecks`] if `count` is zero.
    pub fn create_deck(&mut self, count: u8) -> Result<Shoe, DeckError> {
        let shoe = Self::shuffled_shoe(count, &mut self.rng)?;
        self.deck_cards = shoe.len();
        Ok(shoe)
    }

    /// Builds a shuffled shoe of `count` standard decks using `rng`.
    ///
    /// Use this to inject a seeded source, e.g. in tests.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ZeroDecks`] if `count` is zero.
    pub fn create_deck_with_rng<R: Rng + ?Sized>(
        &mut self,
        count: u8,
        rng: &mut R,
    ) -> Result<Shoe, DeckError> {
        let shoe = Self::shuffled_shoe(count, rng)?;
        self.deck_cards = shoe.len();
        Ok(shoe)
    }

    /// Combines `count` independently built decks and shuffles the pool.
    fn shuffled_shoe<R: Rng + ?Sized>(count: u8, rng: &mut R) -> Result<Shoe, DeckError> {
        if count == 0 {
            return Err(DeckError::ZeroDecks);
        }

        let mut cards = Vec::with_capacity(count as usize * DECK_SIZE);
        for _ in 0..count {
            cards.extend(standard_deck());
        }
        cards.shuffle(rng);

        debug!(decks = count, cards = cards.len(), "created shoe");
        Ok(cards.into())
    }

    /// Builds a shoe with the configured number of decks.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ZeroDecks`] if the options ask for zero decks.
    pub fn create_shoe(&mut self) -> Result<Shoe, DeckError> {
        self.create_deck(self.options.decks)
    }

    /// Removes and returns one card from `side` of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the shoe is empty; counters are
    /// left unchanged.
    pub fn deal_card(&mut self, shoe: &mut Shoe, side: Side) -> Result<Card, DeckError> {
        let card = take(shoe, side)?;
        self.dealt_cards += 1;
        trace!(%card, %side, remaining = shoe.len(), "dealt card");
        Ok(card)
    }

    /// Removes one card from `side` of the shoe without returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the shoe is empty; counters are
    /// left unchanged.
    pub fn discard_card(&mut self, shoe: &mut Shoe, side: Side) -> Result<(), DeckError> {
        let card = take(shoe, side)?;
        self.discarded_cards += 1;
        trace!(%card, %side, remaining = shoe.len(), "discarded card");
        Ok(())
    }

    /// Deals from the configured side.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the shoe is empty.
    pub fn deal(&mut self, shoe: &mut Shoe) -> Result<Card, DeckError> {
        self.deal_card(shoe, self.options.side)
    }

    /// Discards from the configured side.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the shoe is empty.
    pub fn discard(&mut self, shoe: &mut Shoe) -> Result<(), DeckError> {
        self.discard_card(shoe, self.options.side)
    }

    /// Zeroes all three counters.
    pub const fn reset_counters(&mut self) {
        self.deck_cards = 0;
        self.dealt_cards = 0;
        self.discarded_cards = 0;
    }

    /// Returns how many standard decks `deck_cards` stands for.
    #[must_use]
    pub const fn packets(&self) -> usize {
        self.deck_cards / DECK_SIZE
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Regular deck playing cards: packets = {}", self.packets())
    }
}

/// Returns one unshuffled 52-card deck, suit by suit.
pub fn standard_deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
}

/// Counts the remaining copies of every suit/rank pair in the shoe.
#[must_use]
pub fn composition(shoe: &Shoe) -> HashMap<(Suit, Rank), usize> {
    let mut counts = HashMap::new();
    for card in shoe {
        *counts.entry((card.suit(), card.value())).or_insert(0) += 1;
    }
    counts
}

fn take(shoe: &mut Shoe, side: Side) -> Result<Card, DeckError> {
    let card = match side {
        Side::Top => shoe.pop_front(),
        Side::Bottom => shoe.pop_back(),
    };
    card.ok_or_else(|| {
        debug!(%side, "shoe is empty");
        DeckError::EmptyDeck
    })
}
