//! Terminal guess-that-number runner (default binary).
//!
//! Wires the line-based input source and the console view around one game
//! session: parse CLI flags, init logging, draw the target, run the loop.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli_guess::core::{GameRng, GameState};
use cli_guess::engine::{Session, SessionEnd};
use cli_guess::input::LinePrompt;
use cli_guess::term::ConsoleView;
use cli_guess::types::{AttemptBudget, DEFAULT_HIGH, DEFAULT_LOW};

#[derive(Debug, Parser)]
#[command(name = "cli-guess", about = "Bounded number-guessing game for the terminal")]
struct Args {
    /// Lower bound of the guessing range (inclusive).
    #[arg(long, default_value_t = DEFAULT_LOW)]
    low: i64,

    /// Upper bound of the guessing range (inclusive).
    #[arg(long, default_value_t = DEFAULT_HIGH)]
    high: i64,

    /// Attempt budget: a positive integer or "unbounded".
    #[arg(long, default_value = "4", value_parser = parse_budget)]
    attempts: AttemptBudget,

    /// RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn parse_budget(s: &str) -> Result<AttemptBudget, String> {
    AttemptBudget::from_str(s)
        .ok_or_else(|| format!("expected a positive integer or \"unbounded\", got {s:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), low = args.low, high = args.high, "starting session");

    let mut game = GameState::new(args.low, args.high, args.attempts, &mut rng)?;

    let source = LinePrompt::new(io::stdin().lock(), io::stdout(), args.low, args.high);
    let color = !args.no_color && io::stdout().is_terminal();
    let sink = ConsoleView::new(io::stdout()).with_color(color);

    let end = Session::new(source, sink).run(&mut game)?;
    match end {
        SessionEnd::Won { attempts } => info!(attempts, "player won"),
        SessionEnd::Exhausted { target, attempts } => {
            info!(target, attempts, "player ran out of guesses")
        }
        SessionEnd::Quit => info!("player quit"),
    }

    Ok(())
}
