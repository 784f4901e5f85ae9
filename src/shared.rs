//! A deck that can be dealt from several threads.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::DeckOptions;
use crate::sync::Mutex;

/// A [`Deck`] behind a single lock.
///
/// Every operation holds the lock for its whole duration, so a deal never
/// observes a half-finished shuffle and no card is dealt twice.
///
/// # Example
///
/// ```
/// use carddeck::{DeckOptions, SharedDeck};
///
/// let deck = SharedDeck::new(DeckOptions::default(), 7);
/// deck.shuffle();
/// let card = deck.deal().unwrap();
/// assert!(!card.is_joker());
/// assert_eq!(deck.remaining(), 51);
/// ```
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Creates an unshuffled shared deck with the given seed.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::from_deck(Deck::new(options, seed))
    }

    /// Wraps an existing deck, keeping its current order.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Shuffles the cards still in the deck.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Puts every dealt card back and shuffles the full deck.
    pub fn reshuffle(&self) {
        self.deck.lock().reshuffle();
    }

    /// Deals the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&self) -> Result<Card, DealError> {
        self.deck.lock().deal()
    }

    /// Returns whether any cards remain.
    pub fn has_more_cards(&self) -> bool {
        self.deck.lock().has_more_cards()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns the options the deck was built with.
    pub fn options(&self) -> DeckOptions {
        self.deck.lock().options()
    }

    /// Unwraps the inner deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::from_deck(deck)
    }
}
