//! Round result types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player was dealt a natural 21.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has higher value.
    Lose,
    /// Push (tie). The pot stays on the table.
    Push,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// Amount credited to cash.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value, if the dealer played.
    pub dealer_value: Option<u8>,
    /// Pot left on the table after settlement.
    pub pot: usize,
}
