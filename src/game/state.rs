//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting the bet for the next round.
    Betting,
    /// Bet placed, waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer has finished drawing and the round can be resolved.
    Showdown,
    /// Round has been settled; cards still need to go back to the deck.
    RoundOver,
}
