//! Session: drives one game from start to terminal status.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::GameState;
use crate::types::Outcome;

/// Supplies one parsed guess per turn.
///
/// Returning `None` means the player quit or the input closed; the session
/// stops without forcing the game into a terminal state.
pub trait GuessSource {
    fn next_guess(&mut self) -> Option<i64>;
}

/// Receives session events for rendering.
///
/// Implementations render however they like (styled console, captured
/// buffer in tests); the sink never influences game state.
pub trait OutcomeSink {
    /// Called once before the first prompt.
    fn session_started(&mut self, game: &GameState) -> Result<()>;

    /// Called after every evaluated guess.
    fn outcome(&mut self, game: &GameState, outcome: Outcome) -> Result<()>;

    /// Called when the source quits before the game reaches a terminal state.
    fn session_quit(&mut self, game: &GameState) -> Result<()>;
}

impl<S: GuessSource + ?Sized> GuessSource for &mut S {
    fn next_guess(&mut self) -> Option<i64> {
        (**self).next_guess()
    }
}

impl<O: OutcomeSink + ?Sized> OutcomeSink for &mut O {
    fn session_started(&mut self, game: &GameState) -> Result<()> {
        (**self).session_started(game)
    }

    fn outcome(&mut self, game: &GameState, outcome: Outcome) -> Result<()> {
        (**self).outcome(game, outcome)
    }

    fn session_quit(&mut self, game: &GameState) -> Result<()> {
        (**self).session_quit(game)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won { attempts: u32 },
    Exhausted { target: i64, attempts: u32 },
    Quit,
}

/// Drives one [`GameState`] to completion over a source and a sink.
pub struct Session<S, O> {
    source: S,
    sink: O,
}

impl<S: GuessSource, O: OutcomeSink> Session<S, O> {
    pub fn new(source: S, sink: O) -> Self {
        Self { source, sink }
    }

    /// Consume the session and hand back the sink (for output inspection).
    pub fn into_sink(self) -> O {
        self.sink
    }

    /// Run the loop until the game reaches a terminal status or the
    /// source quits.
    pub fn run(&mut self, game: &mut GameState) -> Result<SessionEnd> {
        self.sink.session_started(game)?;

        loop {
            // Check-then-prompt: once the budget is spent the next submit
            // terminates the game on entry, so no fresh guess is read. The
            // value passed on that path is never compared to the target.
            let guess = if game.has_attempts_remaining() {
                match self.source.next_guess() {
                    Some(guess) => guess,
                    None => {
                        debug!(
                            attempts_used = game.attempts_used(),
                            "input closed before terminal status"
                        );
                        self.sink.session_quit(game)?;
                        return Ok(SessionEnd::Quit);
                    }
                }
            } else {
                0
            };

            let outcome = game.submit_guess(guess)?;
            self.sink.outcome(game, outcome)?;

            match outcome {
                Outcome::Win => {
                    info!(attempts = game.attempts_used(), "session won");
                    return Ok(SessionEnd::Won {
                        attempts: game.attempts_used(),
                    });
                }
                Outcome::Exhausted { target } => {
                    info!(attempts = game.attempts_used(), "session exhausted");
                    return Ok(SessionEnd::Exhausted {
                        target,
                        attempts: game.attempts_used(),
                    });
                }
                Outcome::TooHigh | Outcome::TooLow => {}
            }
        }
    }
}
