//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// Bets must be a multiple of this amount, and a round needs at least this much cash.
pub const BET_STEP: usize = 10;

/// The dealer stops drawing once their hand reaches this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// A single-player blackjack game against a fixed-rule dealer.
///
/// The game owns the deck, both hands, and the player's money. Every card is
/// always in exactly one of the three piles. A round is played by calling the
/// phase methods in order:
///
/// 1. [`Game::bet`]
/// 2. [`Game::deal`]
/// 3. [`Game::check_blackjack`]
/// 4. [`Game::hit`] / [`Game::stand`]
/// 5. [`Game::dealer_play`] and [`Game::showdown`]
/// 6. [`Game::clear_round`]
///
/// # Example
///
/// ```
/// use bjack::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.bet(100).unwrap();
/// game.deal().unwrap();
/// if game.check_blackjack().unwrap().is_none() {
///     game.stand().unwrap();
///     game.dealer_play().unwrap();
///     game.showdown().unwrap();
/// }
/// assert_eq!(game.state, GameState::RoundOver);
/// game.clear_round();
/// assert_eq!(game.deck.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not currently in a hand.
    pub deck: Pile,
    /// The player's hand.
    pub player_hand: Pile,
    /// The dealer's hand.
    pub dealer_hand: Pile,
    /// The player's bankroll.
    pub cash: usize,
    /// The amount at stake in the current round.
    pub pot: usize,
    /// Current phase.
    pub state: GameState,
    /// Game options.
    pub options: GameOptions,
    /// Result of the round in progress, once settled.
    result: Option<RoundResult>,
    /// Random number generator, seeded once per game.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a full deck and the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        log::debug!("new game, seed {seed}");
        Self {
            deck: Pile::full_deck(),
            player_hand: Pile::new(),
            dealer_hand: Pile::new(),
            cash: options.starting_cash,
            pot: 0,
            state: GameState::Betting,
            options,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw(&mut self.rng);
        if let Some(card) = card {
            log::debug!("drew {card}, {} left in deck", self.deck.len());
        }
        card
    }

    /// Settles the round and records its result.
    fn finish_round(&mut self, result: RoundResult) -> RoundResult {
        log::info!(
            "round over: {:?}, payout {}, cash {}, pot {}",
            result.outcome,
            result.payout,
            self.cash,
            self.pot
        );
        self.state = GameState::RoundOver;
        self.result = Some(result);
        result
    }

    /// Returns whether the player can no longer play: less than the minimum
    /// bet in cash and nothing at stake.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.cash < BET_STEP && self.pot == 0
    }

    /// Returns whether the player has enough cash for another round.
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.cash >= BET_STEP
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player_hand.value()
    }

    /// Returns the dealer's hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer_hand.value()
    }

    /// Returns the result of the current round, if it has been settled.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns both hands to the deck (called at the end of a round).
    ///
    /// This also clears the round result and returns the game to the
    /// `Betting` state. The pot is left alone.
    pub fn clear_round(&mut self) {
        self.player_hand.drain_into(&mut self.deck);
        self.dealer_hand.drain_into(&mut self.deck);
        self.result = None;
        self.state = GameState::Betting;
        log::debug!("cards returned, {} in deck", self.deck.len());
    }
}
