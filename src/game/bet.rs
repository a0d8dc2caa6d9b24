use crate::error::{BetError, DealError};

use super::{BET_STEP, Game, GameState};

impl Game {
    /// Validates a bet and moves it from cash to the pot.
    ///
    /// A bet of zero is allowed and plays the round for whatever is already in
    /// the pot.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, or the amount is
    /// negative, not a multiple of [`BET_STEP`], more than the player's cash, or
    /// too large for the pot.
    pub fn bet(&mut self, amount: i64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount < 0 {
            return Err(BetError::Negative);
        }
        #[expect(clippy::cast_possible_wrap, reason = "the bet step is a small constant")]
        let step = BET_STEP as i64;
        if amount % step != 0 {
            return Err(BetError::NotMultiple { step: BET_STEP });
        }
        let amount = usize::try_from(amount)
            .ok()
            .filter(|&amount| amount <= self.cash)
            .ok_or(BetError::InsufficientFunds)?;
        let pot = self.pot.checked_add(amount).ok_or(BetError::Overflow)?;

        self.cash -= amount;
        self.pot = pot;
        self.state = GameState::Dealing;
        log::debug!("bet {amount}, cash {}, pot {}", self.cash, self.pot);

        Ok(())
    }

    /// Deals two cards each to the player and the dealer, alternating.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed yet or the deck has fewer
    /// than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player_hand.push(card);
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.dealer_hand.push(card);
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }
}
