//! Deck configuration options.

use crate::card::{DECK_SIZE, JOKER_COUNT};

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carddeck::DeckOptions;
///
/// let options = DeckOptions::default().with_jokers(true);
/// assert_eq!(options.deck_size(), 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Whether two jokers are added after the standard cards.
    pub include_jokers: bool,
}

impl DeckOptions {
    /// Sets whether the deck includes jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert!(options.include_jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, include: bool) -> Self {
        self.include_jokers = include;
        self
    }

    /// Returns the number of cards in a full deck with these options.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        if self.include_jokers {
            DECK_SIZE + JOKER_COUNT
        } else {
            DECK_SIZE
        }
    }
}
