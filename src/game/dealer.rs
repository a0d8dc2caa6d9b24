use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::BLACKJACK;
use crate::result::{RoundOutcome, RoundResult};

use super::{DEALER_STANDS_ON, Game, GameState};

impl Game {
    /// Dealer draws until their hand is worth 17 or more.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer_value() < DEALER_STANDS_ON {
            let card = self.draw().ok_or(ShowdownError::NoCards)?;
            self.dealer_hand.push(card);
            drawn_cards.push(card);
        }

        self.state = GameState::Showdown;
        Ok(drawn_cards)
    }

    /// Compares the hands and settles the pot.
    ///
    /// - Dealer busts or the player is higher: the player receives twice the pot.
    /// - Dealer is higher: the pot is forfeited.
    /// - Tie: nothing is paid and the pot stays on the table for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet or a win would overflow
    /// the player's cash. Nothing is settled in that case.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Showdown {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer_value();
        let player_value = self.player_value();

        let (outcome, payout) = if dealer_value > BLACKJACK || player_value > dealer_value {
            let payout = self.pot.checked_mul(2).ok_or(ShowdownError::Overflow)?;
            (RoundOutcome::Win, payout)
        } else if dealer_value > player_value {
            (RoundOutcome::Lose, 0)
        } else {
            (RoundOutcome::Push, 0)
        };

        match outcome {
            RoundOutcome::Win => {
                self.cash = self
                    .cash
                    .checked_add(payout)
                    .ok_or(ShowdownError::Overflow)?;
                self.pot = 0;
            }
            RoundOutcome::Lose => self.pot = 0,
            _ => {}
        }

        Ok(self.finish_round(RoundResult {
            outcome,
            payout,
            player_value,
            dealer_value: Some(dealer_value),
            pot: self.pot,
        }))
    }
}
