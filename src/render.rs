//! Text rendering of cards.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

const BORDER: &str = "|=====|";
const BLANK: &str = "|     |";

/// Renders one card as five lines: border, value, blank, suit, border.
#[must_use]
pub fn render_card(card: &Card) -> [String; 5] {
    let value = format!("| {:<4}|", card.value());
    let suit = format!("|   {} |", card.suit());

    [
        String::from(BORDER),
        value,
        String::from(BLANK),
        suit,
        String::from(BORDER),
    ]
}

/// Lays the given cards out side by side.
///
/// Row `i` of the result joins row `i` of every card with a single space.
/// An empty slice yields no rows.
///
/// ```
/// use deckrs::{Card, Rank, Suit, render::display_cards};
///
/// let rows = display_cards(&[
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::King),
/// ]);
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[1], "| A   | | K   |");
/// ```
#[must_use]
pub fn display_cards(cards: &[Card]) -> Vec<String> {
    if cards.is_empty() {
        return Vec::new();
    }

    let rendered: Vec<[String; 5]> = cards.iter().map(render_card).collect();
    (0..5)
        .map(|row| {
            rendered
                .iter()
                .map(|lines| lines[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Writes the side-by-side rendering of `cards` to `writer`, one row per line.
///
/// # Errors
///
/// Returns any error raised by `writer`.
#[cfg(feature = "std")]
pub fn write_cards<W: std::io::Write>(writer: &mut W, cards: &[Card]) -> std::io::Result<()> {
    for row in display_cards(cards) {
        writeln!(writer, "{row}")?;
    }
    Ok(())
}
