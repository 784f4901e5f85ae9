//! The deck and its deal/shuffle cycle.

use alloc::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, JOKER_COUNT, Rank, Suit};
use crate::error::DealError;
use crate::options::DeckOptions;

/// A deck of playing cards.
///
/// The front of the deck is the next card to be dealt. A fresh deck is in
/// rank-major order: the four suits of Ace, then the four suits of 2, and so
/// on up to King, followed by the jokers if the options include them.
///
/// Shuffling draws from a seeded [`ChaCha8Rng`], so two decks built from the
/// same seed and driven through the same calls deal the same cards.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front first.
    cards: VecDeque<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, DeckOptions};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.deal().unwrap().to_string(), "Ace of Spades");
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(options.deck_size()),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates an unshuffled 52-card deck.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(DeckOptions::default(), seed)
    }

    /// Creates an unshuffled 54-card deck with two jokers at the end.
    #[must_use]
    pub fn with_jokers(seed: u64) -> Self {
        Self::new(DeckOptions::default().with_jokers(true), seed)
    }

    /// Refills the deck in rank-major order.
    fn reset(&mut self) {
        self.cards.clear();

        for rank in Rank::ALL {
            for suit in Suit::STANDARD {
                self.cards.push_back(Card::new(suit, Some(rank)));
            }
        }

        if self.options.include_jokers {
            for _ in 0..JOKER_COUNT {
                self.cards.push_back(Card::joker());
            }
        }
    }

    /// Shuffles the cards still in the deck.
    ///
    /// Dealt cards are not returned; see [`Deck::reshuffle`] for that.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Puts every dealt card back and shuffles the full deck.
    pub fn reshuffle(&mut self) {
        self.reset();
        self.shuffle();
    }

    /// Deals the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::EmptyDeck)
    }

    /// Returns whether any cards remain.
    #[must_use]
    pub fn has_more_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the deck when full.
    #[must_use]
    pub const fn full_size(&self) -> usize {
        self.options.deck_size()
    }

    /// Returns the options the deck was built with.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }
}
