//! Hand valuation.

use crate::card::Card;

/// The best possible hand value.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.points());
    }

    let mut soft = false;
    // A second promotion would always bust, the threshold check stops it.
    while aces > 0 && value <= 11 {
        value += 10;
        aces -= 1;
        soft = true;
    }

    (value, soft)
}

/// Calculates the best blackjack value of a set of cards.
///
/// Every Ace starts at 1 and one is promoted to 11 when that does not bust the
/// hand. The result is not capped, a busted hand reports its full total.
#[must_use]
pub fn value_of(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the value counts an Ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the value is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    value_of(cards) > BLACKJACK
}

/// Returns whether the cards are a two-card 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && value_of(cards) == BLACKJACK
}
