//! Game configuration options.

/// Cash the player sits down with unless configured otherwise.
pub const DEFAULT_STARTING_CASH: usize = 1000;

/// Configuration options for a game.
///
/// The table rules are fixed; only the player's bankroll is configurable.
///
/// ```
/// use bjack::GameOptions;
///
/// let options = GameOptions::default().with_starting_cash(500);
/// assert_eq!(options.starting_cash, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cash the player starts with.
    pub starting_cash: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
        }
    }
}

impl GameOptions {
    /// Sets the starting cash.
    #[must_use]
    pub const fn with_starting_cash(mut self, cash: usize) -> Self {
        self.starting_cash = cash;
        self
    }
}
