//! Card types and name lookups.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    const fn bit(self) -> u8 {
        match self {
            Self::Hearts => 1 << 0,
            Self::Clubs => 1 << 1,
            Self::Diamonds => 1 << 2,
            Self::Spades => 1 << 3,
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const RANK_NAMES: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

const SUIT_NAMES: [&str; 4] = ["Hearts", "Clubs", "Diamonds", "Spades"];

/// A playing card.
///
/// The rank lives in the high nibble and the suit bit in the low nibble of a
/// single byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u8);

impl Card {
    /// Creates a new card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        assert!(rank >= 1 && rank <= 13, "card rank must be within 1..=13");
        Self((rank << 4) | suit.bit())
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 & 0x0F {
            0b0001 => Suit::Hearts,
            0b0010 => Suit::Clubs,
            0b0100 => Suit::Diamonds,
            0b1000 => Suit::Spades,
            _ => unreachable!(),
        }
    }

    /// Returns the display name of the rank ("Ace", "2", .., "King").
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        RANK_NAMES[(self.rank() - 1) as usize]
    }

    /// Base point value: Ace counts 1, face cards count 10.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self.rank() {
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank() == 1
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("suit", &self.suit())
            .field("rank", &self.rank())
            .finish()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit().name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
