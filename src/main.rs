//! Terminal blackjack.

use std::time::{SystemTime, UNIX_EPOCH};

use bjack::{Game, GameOptions, SessionEnd, StdConsole, session};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "bjack", about = "Play blackjack against the dealer")]
struct Args {
    /// Seed for the card draws (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Cash to start with
    #[arg(long, default_value_t = bjack::options::DEFAULT_STARTING_CASH)]
    cash: usize,

    /// Log engine activity to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr logger. `-v` sets the default level, `RUST_LOG` overrides it.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default().with_starting_cash(args.cash);
    let mut game = Game::new(options, seed);
    let mut console = StdConsole::stdio();

    match session::run(&mut game, &mut console) {
        Ok(SessionEnd::InputClosed) => log::info!("input closed, leaving the table"),
        Ok(end) => log::info!("session ended: {end:?}, final cash {}", game.cash),
        Err(err) => {
            log::error!("{err}");
            eprintln!("Game aborted: {err}");
            std::process::exit(1);
        }
    }
}
