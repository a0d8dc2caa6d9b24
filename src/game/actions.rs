use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{self, BLACKJACK};
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Pays out a natural 21 straight after the deal.
    ///
    /// The player receives the pot plus half of it (rounded down) and the round
    /// ends without a hit/stand or dealer turn. Returns `None` when the player
    /// does not hold 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the payout
    /// would overflow the player's cash.
    pub fn check_blackjack(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_player_turn()?;

        if !hand::is_natural(self.player_hand.cards()) {
            return Ok(None);
        }

        let payout = self
            .pot
            .checked_add(self.pot / 2)
            .ok_or(ActionError::Overflow)?;
        self.cash = self
            .cash
            .checked_add(payout)
            .ok_or(ActionError::Overflow)?;
        self.pot = 0;

        Ok(Some(self.finish_round(RoundResult {
            outcome: RoundOutcome::Blackjack,
            payout,
            player_value: BLACKJACK,
            dealer_value: None,
            pot: 0,
        })))
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the hand goes over 21 the pot is forfeited and the round ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player_hand.push(card);

        if hand::is_bust(self.player_hand.cards()) {
            self.pot = 0;
            self.finish_round(RoundResult {
                outcome: RoundOutcome::Bust,
                payout: 0,
                player_value: self.player_value(),
                dealer_value: None,
                pot: 0,
            });
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
