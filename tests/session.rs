//! Session loop tests driven by scripted input.

use std::collections::VecDeque;
use std::io::Cursor;

use bjack::session::{self, format_hand};
use bjack::{Card, Console, DECK_SIZE, Game, GameOptions, Pile, SessionEnd, StdConsole, Suit};

/// Console that answers prompts from a script and records everything shown.
struct ScriptedConsole {
    answers: VecDeque<&'static str>,
    lines: Vec<String>,
}

impl ScriptedConsole {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            lines: Vec::new(),
        }
    }

    fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == line).count()
    }

    fn shows(&self, line: &str) -> bool {
        self.count(line) > 0
    }
}

impl Console for ScriptedConsole {
    fn report(&mut self, message: &str) {
        self.lines.push(message.to_owned());
    }

    fn prompt_integer(&mut self, prompt: &str) -> Option<i64> {
        loop {
            self.lines.push(prompt.to_owned());
            if let Ok(value) = self.answers.pop_front()?.parse() {
                return Some(value);
            }
        }
    }

    fn prompt_choice(&mut self, prompt: &str) -> Option<char> {
        self.lines.push(prompt.to_owned());
        self.answers.pop_front()?.chars().next()
    }
}

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Sixteen cards all worth ten, so every deal is 20 against 20.
fn ten_valued_deck() -> Pile {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (10..=13).map(move |rank| card(suit, rank)))
        .collect()
}

fn pile(cards: &[Card]) -> Pile {
    cards.iter().copied().collect()
}

fn rigged_game(cash: usize) -> Game {
    let mut game = Game::new(GameOptions::default().with_starting_cash(cash), 1);
    game.deck = ten_valued_deck();
    game
}

#[test]
fn bust_skips_dealer_and_forfeits_pot() {
    let mut game = rigged_game(1000);
    let mut console = ScriptedConsole::new(&["100", "h", "n"]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::PlayerQuit);
    assert_eq!(game.cash, 900);
    assert_eq!(game.pot, 0);
    assert!(console.shows("Player hand value: 30"));
    assert!(console.shows("Bust! You lose."));
    assert!(!console.lines.iter().any(|l| l.starts_with("Dealer hand value")));

    assert_eq!(game.deck.len(), 16);
    assert!(game.player_hand.is_empty());
    assert!(game.dealer_hand.is_empty());
}

#[test]
fn tie_carries_pot_into_next_bet() {
    let mut game = rigged_game(1000);
    let mut console = ScriptedConsole::new(&["100", "s", "y", "100", "s", "n"]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::PlayerQuit);
    assert_eq!(console.count("It's a tie."), 2);
    assert!(console.shows("Cash: 900, Pot: 100"));
    assert_eq!(game.cash, 800);
    assert_eq!(game.pot, 200);
}

#[test]
fn invalid_bets_are_reprompted() {
    let mut game = rigged_game(1000);
    let mut console = ScriptedConsole::new(&["15", "-10", "2000", "ten", "0", "s", "n"]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::PlayerQuit);

    let rejected = console
        .lines
        .iter()
        .filter(|l| l.starts_with("Invalid bet"))
        .count();
    assert_eq!(rejected, 3);
    assert!(console.shows("Invalid bet (bet must be a multiple of 10). Try again."));
    assert!(console.shows("Invalid bet (bet amount is negative). Try again."));
    assert!(console.shows("Invalid bet (insufficient funds). Try again."));
    assert_eq!(game.cash, 1000);
}

#[test]
fn unknown_hit_or_stand_answer_asks_again() {
    let mut game = rigged_game(1000);
    let mut console = ScriptedConsole::new(&["10", "x", "s", "n"]);

    session::run(&mut game, &mut console).unwrap();
    assert_eq!(console.count("Do you want to hit or stand? (h/s): "), 2);
    assert_eq!(console.count("Player hand value: 20"), 2);
}

#[test]
fn deal_conceals_dealer_second_card() {
    let mut game = rigged_game(1000);
    let mut console = ScriptedConsole::new(&["10", "s", "n"]);

    session::run(&mut game, &mut console).unwrap();
    let dealer_lines: Vec<_> = console
        .lines
        .iter()
        .filter(|l| l.starts_with("Dealer: "))
        .collect();
    assert_eq!(dealer_lines.len(), 2);
    assert!(dealer_lines[0].ends_with(", ??????"));
    assert!(!dealer_lines[1].contains("??????"));
}

#[test]
fn natural_pays_out_and_skips_the_rest_of_the_round() {
    let mut naturals = 0;
    for seed in 0..32 {
        let mut game = Game::new(GameOptions::default(), seed);
        game.deck = pile(&[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 12),
            card(Suit::Diamonds, 13),
            card(Suit::Clubs, 12),
            card(Suit::Spades, 11),
            card(Suit::Hearts, 11),
        ]);
        let mut console = ScriptedConsole::new(&["100", "s", "n"]);

        session::run(&mut game, &mut console).unwrap();
        if !console.shows("Blackjack! You win.") {
            continue;
        }
        naturals += 1;

        assert_eq!(game.cash, 1050);
        assert_eq!(game.pot, 0);
        assert!(!console.shows("Do you want to hit or stand? (h/s): "));
        assert!(!console.lines.iter().any(|l| l.starts_with("Player hand value")));
        assert!(!console.lines.iter().any(|l| l.starts_with("Dealer hand value")));
        let dealer_lines: Vec<_> = console
            .lines
            .iter()
            .filter(|l| l.starts_with("Dealer: "))
            .collect();
        assert_eq!(dealer_lines.len(), 1);
        assert!(dealer_lines[0].ends_with(", ??????"));
        assert!(console.shows("Do you want to play again? (y/n): "));
        assert_eq!(game.deck.len(), 8);
    }
    assert!(naturals > 0);
}

#[test]
fn losing_last_cash_ends_game() {
    let mut game = rigged_game(100);
    let mut console = ScriptedConsole::new(&["100", "h"]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::OutOfCash);
    assert_eq!(game.cash, 0);
    assert!(console.shows("Out of cash. Game over."));
    assert!(!console.shows("Do you want to play again? (y/n): "));
}

#[test]
fn broke_player_never_bets() {
    let mut game = rigged_game(5);
    let mut console = ScriptedConsole::new(&[]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::OutOfCash);
    assert_eq!(
        console.lines,
        vec!["Cash: 5, Pot: 0".to_owned(), "Out of cash. Game over.".to_owned()]
    );
}

#[test]
fn closed_input_ends_session_with_cards_returned() {
    let mut game = Game::new(GameOptions::default(), 8);
    let mut console = ScriptedConsole::new(&["50"]);

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(game.deck.len(), DECK_SIZE);
    assert!(game.player_hand.is_empty());
}

#[test]
fn empty_deck_aborts_session() {
    let mut game = Game::new(GameOptions::default(), 8);
    game.deck = Pile::new();
    let mut console = ScriptedConsole::new(&["10"]);

    assert!(session::run(&mut game, &mut console).is_err());
}

#[test]
fn random_sessions_keep_every_card() {
    for seed in 0..32 {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut console =
            ScriptedConsole::new(&["100", "h", "s", "y", "50", "s", "y", "0", "h", "h", "s", "n"]);

        let end = session::run(&mut game, &mut console).unwrap();
        assert_ne!(end, SessionEnd::OutOfCash);
        assert_eq!(game.deck.len(), DECK_SIZE);
        assert!(game.player_hand.is_empty());
        assert!(game.dealer_hand.is_empty());
    }
}

#[test]
fn format_hand_hides_only_second_card() {
    let hand: Pile = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 7),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        format_hand(&hand, true),
        "Ace of Spades, ??????, 7 of Clubs"
    );
    assert_eq!(
        format_hand(&hand, false),
        "Ace of Spades, 10 of Hearts, 7 of Clubs"
    );
    assert_eq!(format_hand(&Pile::new(), true), "");
}

#[test]
fn std_console_reprompts_malformed_input() {
    let mut game = rigged_game(1000);
    let input = Cursor::new("abc\n100\n\nx\ns\nn\n");
    let mut console = StdConsole::new(input, Vec::new());

    let end = session::run(&mut game, &mut console).unwrap();
    assert_eq!(end, SessionEnd::PlayerQuit);

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert!(output.contains("Please enter a number."));
    assert!(output.contains("It's a tie."));
    assert!(output.contains("Dealer hand value: 20"));
    assert_eq!(game.pot, 100);
}

#[test]
fn std_console_reports_end_of_input() {
    let mut console = StdConsole::new(Cursor::new(""), Vec::new());
    assert_eq!(console.prompt_integer("bet: "), None);
    assert_eq!(console.prompt_choice("again? "), None);

    let mut console = StdConsole::new(Cursor::new("Yes\n"), Vec::new());
    assert_eq!(console.prompt_choice("again? "), Some('y'));
}
