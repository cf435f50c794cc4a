//! ConsoleView: maps session events onto console lines.

use std::io::Write;

use anyhow::Result;
use crossterm::style::{style, Color, Stylize};

use cli_guess_engine::OutcomeSink;

use crate::core::GameState;
use crate::types::{AttemptBudget, Outcome};

/// Console renderer for one session.
pub struct ConsoleView<W> {
    writer: W,
    color: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consume the view and hand back the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str, color: Color) -> Result<()> {
        if self.color {
            writeln!(self.writer, "{}", style(text).with(color))?;
        } else {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }
}

impl<W: Write> OutcomeSink for ConsoleView<W> {
    fn session_started(&mut self, game: &GameState) -> Result<()> {
        self.line(
            "Are you excited?  It's time to play guess that number!",
            Color::Cyan,
        )?;

        if let AttemptBudget::Limited(allowed) = game.budget() {
            let noun = if allowed == 1 { "guess" } else { "guesses" };
            writeln!(self.writer, "You have {allowed} {noun}.")?;
        }
        Ok(())
    }

    fn outcome(&mut self, game: &GameState, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::TooHigh => self.line("Too high", Color::Yellow)?,
            Outcome::TooLow => self.line("Too low", Color::Yellow)?,
            Outcome::Win => {
                self.line("You're the winner", Color::Green)?;
                writeln!(self.writer, "Guessed in {} attempts.", game.attempts_used())?;
            }
            Outcome::Exhausted { target } => {
                self.line("Game Over: Too many guesses!", Color::Red)?;
                writeln!(self.writer, "Random number was:  {target}")?;
            }
        }
        Ok(())
    }

    fn session_quit(&mut self, game: &GameState) -> Result<()> {
        writeln!(
            self.writer,
            "Quitting after {} attempts. Come back soon!",
            game.attempts_used()
        )?;
        Ok(())
    }
}
