//! A single-player blackjack game against a fixed-rule dealer, with optional
//! `no_std` support for the engine.
//!
//! The crate provides a [`Game`] type that owns the deck and both hands and
//! steps through a round (bet, deal, natural check, hit/stand, dealer draw,
//! payout, reset), and a [`session`] loop that plays rounds through any
//! [`Console`].
//!
//! Table rules are fixed: bets in steps of 10, a natural pays 3:2 rounded
//! down, the dealer stands on 17, and a tie leaves the pot on the table.
//!
//! # Example
//!
//! ```
//! use bjack::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.bet(50).unwrap();
//! assert_eq!(game.cash, 950);
//! assert_eq!(game.pot, 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::StdConsole;
pub use error::{ActionError, BetError, DealError, GameError, ShowdownError};
pub use game::{BET_STEP, DEALER_STANDS_ON, Game, GameState};
pub use hand::{BLACKJACK, value_of};
pub use options::GameOptions;
pub use pile::Pile;
pub use result::{RoundOutcome, RoundResult};
pub use session::{Console, SessionEnd};
