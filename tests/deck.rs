//! Deck integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, Deck, DeckError, DeckOptions, Rank, Shoe, Side, Suit, composition,
    standard_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck() -> Deck {
    Deck::new(DeckOptions::default(), 7)
}

#[test]
fn new_deck_has_zero_counters() {
    let deck = deck();
    assert_eq!(deck.deck_cards, 0);
    assert_eq!(deck.dealt_cards, 0);
    assert_eq!(deck.discarded_cards, 0);
}

#[test]
fn single_deck_has_52_unique_cards() {
    let mut deck = deck();
    let shoe = deck.create_deck(1).unwrap();

    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(deck.deck_cards, DECK_SIZE);
    let unique: HashSet<&Card> = shoe.iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn multi_deck_has_count_copies_of_every_card() {
    for count in [1u8, 2, 6] {
        let mut deck = deck();
        let shoe = deck.create_deck(count).unwrap();

        assert_eq!(shoe.len(), count as usize * DECK_SIZE);
        assert_eq!(deck.deck_cards, count as usize * DECK_SIZE);

        let counts = composition(&shoe);
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&copies| copies == count as usize));
    }
}

#[test]
fn create_deck_does_not_touch_other_counters() {
    let mut deck = deck();
    deck.dealt_cards = 3;
    deck.discarded_cards = 4;
    let _ = deck.create_deck(2).unwrap();
    assert_eq!(deck.dealt_cards, 3);
    assert_eq!(deck.discarded_cards, 4);
}

#[test]
fn zero_decks_is_rejected() {
    let mut deck = deck();
    deck.deck_cards = 10;
    assert_eq!(deck.create_deck(0).unwrap_err(), DeckError::ZeroDecks);
    assert_eq!(deck.deck_cards, 10);
}

#[test]
fn shoe_is_shuffled() {
    let mut deck = deck();
    let shoe = deck.create_deck(2).unwrap();
    let sorted: Vec<Card> = standard_deck().chain(standard_deck()).collect();
    assert_ne!(shoe.iter().cloned().collect::<Vec<_>>(), sorted);
}

#[test]
fn same_seed_gives_same_shoe() {
    let mut a = Deck::new(DeckOptions::default(), 42);
    let mut b = Deck::new(DeckOptions::default(), 42);
    assert_eq!(a.create_deck(1).unwrap(), b.create_deck(1).unwrap());

    // The internal generator advances between shoes.
    let first = a.create_deck(1).unwrap();
    let second = a.create_deck(1).unwrap();
    assert_ne!(first, second);
}

#[test]
fn injected_rng_is_used() {
    let mut a = deck();
    let mut b = Deck::new(DeckOptions::default(), 999);

    let shoe_a = a
        .create_deck_with_rng(1, &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap();
    let shoe_b = b
        .create_deck_with_rng(1, &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap();
    assert_eq!(shoe_a, shoe_b);
    assert_eq!(a.deck_cards, DECK_SIZE);
}

#[test]
fn deal_top_takes_front() {
    let mut deck = deck();
    let mut shoe = deck.create_deck(1).unwrap();
    let first = shoe.front().cloned().unwrap();

    let dealt = deck.deal_card(&mut shoe, Side::Top).unwrap();
    assert_eq!(dealt, first);
    assert_eq!(shoe.len(), 51);
    assert_eq!(deck.dealt_cards, 1);
    assert_eq!(deck.deck_cards, DECK_SIZE);
}

#[test]
fn deal_bottom_takes_back() {
    let mut deck = deck();
    let mut shoe = Shoe::from(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::King),
    ]);

    let dealt = deck.deal_card(&mut shoe, Side::Bottom).unwrap();
    assert_eq!(dealt, card(Suit::Spades, Rank::King));
    assert_eq!(shoe.len(), 1);
    assert_eq!(shoe.front(), Some(&card(Suit::Hearts, Rank::Two)));
}

#[test]
fn discard_removes_without_dealing() {
    let mut deck = deck();
    let mut shoe = Shoe::from(vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Spades, Rank::King),
    ]);

    deck.discard_card(&mut shoe, Side::Top).unwrap();
    deck.discard_card(&mut shoe, Side::Bottom).unwrap();

    assert_eq!(shoe, Shoe::from(vec![card(Suit::Clubs, Rank::Five)]));
    assert_eq!(deck.discarded_cards, 2);
    assert_eq!(deck.dealt_cards, 0);
}

#[test]
fn dealing_everything_empties_the_shoe() {
    let mut deck = deck();
    let mut shoe = deck.create_deck(3).unwrap();

    let mut dealt = 0;
    while !shoe.is_empty() {
        deck.deal_card(&mut shoe, Side::Top).unwrap();
        dealt += 1;
    }

    assert_eq!(dealt, 3 * DECK_SIZE);
    assert_eq!(deck.dealt_cards, 3 * DECK_SIZE);
    assert_eq!(deck.deck_cards, 3 * DECK_SIZE);
}

#[test]
fn empty_shoe_errors_and_keeps_counters() {
    let mut deck = deck();
    let mut shoe = Shoe::new();

    for side in [Side::Top, Side::Bottom] {
        assert_eq!(
            deck.deal_card(&mut shoe, side).unwrap_err(),
            DeckError::EmptyDeck
        );
        assert_eq!(
            deck.discard_card(&mut shoe, side).unwrap_err(),
            DeckError::EmptyDeck
        );
    }
    assert_eq!(deck.dealt_cards, 0);
    assert_eq!(deck.discarded_cards, 0);
}

#[test]
fn configured_side_is_used() {
    let options = DeckOptions::default().with_side(Side::Bottom).with_decks(2);
    let mut deck = Deck::new(options, 3);
    let mut shoe = deck.create_shoe().unwrap();
    assert_eq!(deck.deck_cards, 2 * DECK_SIZE);

    let last = shoe.back().cloned().unwrap();
    assert_eq!(deck.deal(&mut shoe).unwrap(), last);

    let front = shoe.front().cloned().unwrap();
    deck.discard(&mut shoe).unwrap();
    assert_eq!(shoe.front(), Some(&front));
    assert_eq!(shoe.len(), 2 * DECK_SIZE - 2);
    assert_eq!(deck.dealt_cards, 1);
    assert_eq!(deck.discarded_cards, 1);
}

#[test]
fn counters_are_freely_writable() {
    let mut deck = deck();
    let mut shoe = deck.create_deck(1).unwrap();

    deck.deck_cards = 1000;
    deck.dealt_cards = 50;
    deck.deal_card(&mut shoe, Side::Top).unwrap();
    assert_eq!(deck.dealt_cards, 51);
    assert_eq!(deck.deck_cards, 1000);
    assert_eq!(deck.packets(), 19);

    deck.reset_counters();
    assert_eq!(deck.deck_cards, 0);
    assert_eq!(deck.dealt_cards, 0);
    assert_eq!(deck.discarded_cards, 0);
}

#[test]
fn dealt_cards_keep_independent_worth() {
    let mut deck = deck();
    let mut shoe = deck.create_deck(2).unwrap();
    let mut dealt = deck.deal_card(&mut shoe, Side::Top).unwrap();
    dealt.set_worth(11).unwrap();

    let twin = shoe
        .iter()
        .find(|c| c.suit() == dealt.suit() && c.value() == dealt.value())
        .unwrap();
    assert_eq!(twin.worth(), dealt.value().default_worth());
}

#[test]
fn side_parses_from_text() {
    assert_eq!("top".parse::<Side>(), Ok(Side::Top));
    assert_eq!("bottom".parse::<Side>(), Ok(Side::Bottom));
    assert!("middle".parse::<Side>().is_err());
    assert_eq!(Side::default(), Side::Top);
    assert_eq!(Side::Bottom.to_string(), "bottom");
}

#[test]
fn display_reports_packets() {
    let mut deck = deck();
    let _ = deck.create_deck(4).unwrap();
    assert_eq!(deck.to_string(), "Regular deck playing cards: packets = 4");
}
