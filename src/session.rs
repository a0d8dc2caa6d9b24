//! The interactive round loop and its presentation contract.
//!
//! [`run`] drives a [`Game`] through complete rounds, talking to the player
//! only through a [`Console`]. The console decides how text is shown and how
//! answers are read; the session decides what to ask and when.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{BetError, GameError};
use crate::game::{BET_STEP, Game, GameState};
use crate::pile::Pile;
use crate::result::RoundOutcome;

/// Placeholder shown instead of a concealed card.
pub const HIDDEN_CARD: &str = "??????";

/// Input and output used by a session.
pub trait Console {
    /// Emits one line of text.
    fn report(&mut self, message: &str);

    /// Asks for a whole number. Returns `None` once input is closed.
    fn prompt_integer(&mut self, prompt: &str) -> Option<i64>;

    /// Asks for a single character answer. Returns `None` once input is closed.
    fn prompt_choice(&mut self, prompt: &str) -> Option<char>;

    /// Emits a labelled hand, optionally hiding its second card.
    fn render_hand(&mut self, label: &str, hand: &Pile, conceal_second: bool) {
        self.report(&format!("{label}: {}", format_hand(hand, conceal_second)));
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player cannot cover the minimum bet.
    OutOfCash,
    /// The player declined another round.
    PlayerQuit,
    /// Input was closed while waiting for an answer.
    InputClosed,
}

/// Lists a hand's cards, e.g. `"Ace of Spades, ??????"`.
#[must_use]
pub fn format_hand(hand: &Pile, conceal_second: bool) -> String {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if conceal_second && index == 1 {
                String::from(HIDDEN_CARD)
            } else {
                format!("{card}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plays rounds until the player quits, runs out of cash, or input closes.
///
/// # Errors
///
/// Returns an error only if the game's bookkeeping is inconsistent, for
/// example the deck running dry.
pub fn run<C: Console + ?Sized>(game: &mut Game, console: &mut C) -> Result<SessionEnd, GameError> {
    loop {
        let ended = play_round(game, console)?;
        game.clear_round();
        if let Some(end) = ended {
            return Ok(end);
        }

        if !game.can_continue() {
            console.report("Out of cash. Game over.");
            return Ok(SessionEnd::OutOfCash);
        }

        match console.prompt_choice("Do you want to play again? (y/n): ") {
            Some(choice) if choice.eq_ignore_ascii_case(&'y') => {}
            Some(_) => return Ok(SessionEnd::PlayerQuit),
            None => return Ok(SessionEnd::InputClosed),
        }
    }
}

fn play_round<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<Option<SessionEnd>, GameError> {
    if let Some(end) = betting_phase(game, console)? {
        return Ok(Some(end));
    }

    game.deal()?;
    console.render_hand("Dealer", &game.dealer_hand, true);
    console.render_hand("Player", &game.player_hand, false);

    if game.check_blackjack()?.is_some() {
        console.report("Blackjack! You win.");
        return Ok(None);
    }

    if let Some(end) = player_turn(game, console)? {
        return Ok(Some(end));
    }
    if game.state == GameState::RoundOver {
        return Ok(None);
    }

    game.dealer_play()?;
    let result = game.showdown()?;
    console.render_hand("Dealer", &game.dealer_hand, false);
    console.report(&format!("Dealer hand value: {}", game.dealer_value()));
    console.report(match result.outcome {
        RoundOutcome::Win => "You win!",
        RoundOutcome::Lose => "Dealer wins.",
        _ => "It's a tie.",
    });

    Ok(None)
}

fn betting_phase<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<Option<SessionEnd>, GameError> {
    console.report(&format!("Cash: {}, Pot: {}", game.cash, game.pot));

    if game.is_broke() {
        console.report("Out of cash. Game over.");
        return Ok(Some(SessionEnd::OutOfCash));
    }

    let prompt = format!("Enter your bet (multiples of {BET_STEP}): ");
    loop {
        let Some(amount) = console.prompt_integer(&prompt) else {
            return Ok(Some(SessionEnd::InputClosed));
        };

        match game.bet(amount) {
            Ok(()) => return Ok(None),
            Err(BetError::InvalidState) => return Err(BetError::InvalidState.into()),
            Err(err) => {
                log::warn!("rejected bet of {amount}: {err}");
                console.report(&format!("Invalid bet ({err}). Try again."));
            }
        }
    }
}

fn player_turn<C: Console + ?Sized>(
    game: &mut Game,
    console: &mut C,
) -> Result<Option<SessionEnd>, GameError> {
    loop {
        console.report(&format!("Player hand value: {}", game.player_value()));

        if game.state == GameState::RoundOver {
            console.report("Bust! You lose.");
            return Ok(None);
        }

        match console.prompt_choice("Do you want to hit or stand? (h/s): ") {
            None => return Ok(Some(SessionEnd::InputClosed)),
            Some('s' | 'S') => {
                game.stand()?;
                return Ok(None);
            }
            Some('h' | 'H') => {
                game.hit()?;
                console.render_hand("Player", &game.player_hand, false);
            }
            Some(_) => {}
        }
    }
}
