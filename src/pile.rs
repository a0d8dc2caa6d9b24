//! Unordered card collections.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand;

/// An unordered pile of cards.
///
/// The deck and both hands are piles. Cards enter with [`Pile::push`] and leave
/// with [`Pile::draw`], which picks uniformly among the current members, so a
/// pile never needs to be shuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding one of each rank and suit.
    #[must_use]
    pub fn full_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Removes and returns a card chosen uniformly at random.
    ///
    /// Returns `None` and leaves the pile untouched when it is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(index))
    }

    /// Adds a card to the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Moves every card of this pile into `other`, leaving this pile empty.
    pub fn drain_into(&mut self, other: &mut Self) {
        other.cards.append(&mut self.cards);
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best blackjack value of the pile, see [`hand::value_of`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand::value_of(&self.cards)
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
