//! Deals a shuffled deck and prints every card.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use carddeck::{DealError, Deck, DeckOptions};

fn main() {
    let include_jokers = env::args().any(|arg| arg == "--jokers");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = DeckOptions::default().with_jokers(include_jokers);
    let mut deck = Deck::new(options, seed);
    deck.shuffle();

    println!("Dealing {} cards (seed {seed}):", deck.remaining());
    let mut count = 0;
    while deck.has_more_cards() {
        match deck.deal() {
            Ok(card) => {
                count += 1;
                println!("{count:>2}. {card}");
            }
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        }
    }

    if deck.deal() == Err(DealError::EmptyDeck) {
        println!("Deck is empty.");
    }

    deck.reshuffle();
    println!("Reshuffled, {} cards back in the deck.", deck.remaining());
    if let Ok(card) = deck.deal() {
        println!("Top card is now {card}.");
    }
}
