//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that is built in a fixed rank-major order,
//! shuffled from a seeded generator, and dealt one card at a time until it
//! runs out. [`SharedDeck`] wraps a deck behind a lock for use from several
//! threads.
//!
//! # Example
//!
//! ```
//! use carddeck::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default().with_jokers(true), 42);
//! deck.shuffle();
//!
//! let mut dealt = 0;
//! while let Ok(card) = deck.deal() {
//!     let _ = card.to_string();
//!     dealt += 1;
//! }
//! assert_eq!(dealt, 54);
//!
//! deck.reshuffle();
//! assert_eq!(deck.remaining(), 54);
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
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError};
pub use options::DeckOptions;
pub use shared::SharedDeck;
