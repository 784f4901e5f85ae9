//! Card types and deck-size constants.

use core::fmt;

use crate::error::CardError;

/// Card rank, Ace low.
///
/// The discriminant is the rank's ordinal (0 for Ace through 12 for King) and
/// is what ordering comparisons use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 0,
    /// Two.
    Two = 1,
    /// Three.
    Three = 2,
    /// Four.
    Four = 3,
    /// Five.
    Five = 4,
    /// Six.
    Six = 5,
    /// Seven.
    Seven = 6,
    /// Eight.
    Eight = 7,
    /// Nine.
    Nine = 8,
    /// Ten.
    Ten = 9,
    /// Jack.
    Jack = 10,
    /// Queen.
    Queen = 11,
    /// King.
    King = 12,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by its ordinal.
    ///
    /// Returns `None` for values above 12.
    ///
    /// ```
    /// use carddeck::Rank;
    ///
    /// assert_eq!(Rank::from_ordinal(10), Some(Rank::Jack));
    /// assert_eq!(Rank::from_ordinal(13), None);
    /// ```
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if (ordinal as usize) < Self::ALL.len() {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Returns the display name, e.g. `"Ace"` or `"7"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
///
/// [`Suit::Joker`] marks a joker card; it never pairs with a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Joker.
    Joker,
}

impl Suit {
    /// All suits, joker last.
    pub const ALL: [Self; 5] = [
        Self::Spades,
        Self::Hearts,
        Self::Diamonds,
        Self::Clubs,
        Self::Joker,
    ];

    /// The four suits that combine with a rank.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the display name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Joker => "Joker",
        }
    }

    /// Returns whether this is the joker suit.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards compare and hash by suit and rank. Jokers carry no rank, so any two
/// jokers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Option<Rank>,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check that `rank` is `None` exactly when
    /// `suit` is [`Suit::Joker`]. [`Deck`](crate::Deck) only ever builds
    /// well-formed cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: Option<Rank>) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from possibly missing parts.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingSuit`] if `suit` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Card, CardError, Rank, Suit};
    ///
    /// let card = Card::try_new(Some(Suit::Clubs), Some(Rank::Queen)).unwrap();
    /// assert_eq!(card.to_string(), "Queen of Clubs");
    /// assert_eq!(Card::try_new(None, Some(Rank::Two)), Err(CardError::MissingSuit));
    /// ```
    pub const fn try_new(suit: Option<Suit>, rank: Option<Rank>) -> Result<Self, CardError> {
        match suit {
            Some(suit) => Ok(Self::new(suit, rank)),
            None => Err(CardError::MissingSuit),
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, None)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.suit, self.rank) {
            (Suit::Joker, _) => f.write_str(Suit::Joker.name()),
            (suit, Some(rank)) => write!(f, "{rank} of {suit}"),
            // Only reachable through `Card::new` with a missing rank.
            (suit, None) => write!(f, "{suit}"),
        }
    }
}

/// Number of cards in a deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Number of jokers added when a deck includes them.
pub const JOKER_COUNT: usize = 2;
