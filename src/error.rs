//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is negative.
    #[error("bet amount is negative")]
    Negative,
    /// Bet amount is not a multiple of the bet step.
    #[error("bet must be a multiple of {step}")]
    NotMultiple {
        /// The required bet step.
        step: usize,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The pot cannot hold this bet.
    #[error("pot would overflow")]
    Overflow,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// The payout does not fit in the bankroll.
    #[error("payout would overflow the bankroll")]
    Overflow,
}

/// Errors that can occur during the dealer's turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// The payout does not fit in the bankroll.
    #[error("payout would overflow the bankroll")]
    Overflow,
}

/// Errors that abort a running session.
///
/// These only surface when the engine's bookkeeping is broken; bad player input
/// is handled by re-prompting and never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Betting failed.
    #[error("betting failed: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("dealing failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer's turn failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}
