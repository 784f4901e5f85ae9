//! Shared deck tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use carddeck::{Card, DECK_SIZE, DealError, Deck, DeckOptions, SharedDeck};

#[test]
fn threads_never_deal_the_same_card() {
    let deck = Arc::new(SharedDeck::new(DeckOptions::default(), 3));
    deck.shuffle();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let deck = Arc::clone(&deck);
            thread::spawn(move || {
                let mut dealt = Vec::new();
                while let Ok(card) = deck.deal() {
                    dealt.push(card);
                }
                dealt
            })
        })
        .collect();

    let cards: Vec<Card> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(!deck.has_more_cards());
    assert_eq!(deck.deal(), Err(DealError::EmptyDeck));
}

#[test]
fn reshuffle_refills_shared_deck() {
    let deck = SharedDeck::new(DeckOptions::default().with_jokers(true), 8);
    for _ in 0..30 {
        deck.deal().unwrap();
    }
    assert_eq!(deck.remaining(), 24);

    deck.reshuffle();
    assert_eq!(deck.remaining(), 54);
    assert!(deck.options().include_jokers);
}

#[test]
fn wraps_and_unwraps_deck() {
    let mut deck = Deck::standard(4);
    deck.deal().unwrap();

    let shared = SharedDeck::from(deck);
    assert_eq!(shared.remaining(), DECK_SIZE - 1);
    shared.deal().unwrap();

    let deck = shared.into_inner();
    assert_eq!(deck.remaining(), DECK_SIZE - 2);
}
