//! Interactive card drawing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::render::write_cards;
use deckrs::{Card, Deck, DeckOptions, Side};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("Card drawing example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(decks) = prompt_u8("Number of decks in the shoe (1-255): ") else {
        return;
    };
    let mut deck = Deck::new(DeckOptions::default().with_decks(decks), seed);
    let mut shoe = match deck.create_shoe() {
        Ok(shoe) => shoe,
        Err(err) => {
            println!("Shoe error: {err}");
            return;
        }
    };
    println!("{deck}");

    let mut hand: Vec<Card> = Vec::new();
    loop {
        println!(
            "\nShoe: {} cards remaining, {} dealt, {} discarded",
            shoe.len(),
            deck.dealt_cards,
            deck.discarded_cards
        );

        match prompt_line("[d]eal, [b]ottom deal, [x] discard, [q]uit: ").as_str() {
            "d" | "deal" => deal_into(&mut deck, &mut shoe, Side::Top, &mut hand),
            "b" | "bottom" => deal_into(&mut deck, &mut shoe, Side::Bottom, &mut hand),
            "x" | "discard" => match deck.discard(&mut shoe) {
                Ok(()) => println!("Card discarded."),
                Err(err) => println!("Discard error: {err}"),
            },
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
        }

        if !hand.is_empty() {
            let total: u32 = hand.iter().map(|card| u32::from(card.worth())).sum();
            println!("\nHand (worth {total}):");
            let _ = write_cards(&mut io::stdout(), &hand);
        }
    }
}

fn deal_into(deck: &mut Deck, shoe: &mut deckrs::Shoe, side: Side, hand: &mut Vec<Card>) {
    match deck.deal_card(shoe, side) {
        Ok(card) => {
            println!("Dealt {card} from the {side}.");
            hand.push(card);
        }
        Err(err) => println!("Deal error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // Treat end of input as quitting.
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn prompt_u8(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
