//! LinePrompt: blocking line-based guess source.
//!
//! Prompts, reads one line, parses it, and re-prompts on invalid input.
//! Generic over the reader and the prompt writer so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use cli_guess_engine::GuessSource;

use crate::parse::{parse_guess, should_quit};
use crate::types::REPROMPT_LIMIT;

/// Reads guesses from a line-oriented input, one per turn.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    prompt: String,
    /// Consecutive invalid lines seen on the current turn.
    invalid_streak: u32,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W, low: i64, high: i64) -> Self {
        Self {
            reader,
            writer,
            prompt: format!("Pick a number between {low}-{high}:  "),
            invalid_streak: 0,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        if self.writer.write_all(self.prompt.as_bytes()).is_err() {
            return None;
        }
        if self.writer.flush().is_err() {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            // 0 bytes read = end of input.
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!(%err, "failed to read input");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GuessSource for LinePrompt<R, W> {
    fn next_guess(&mut self) -> Option<i64> {
        self.invalid_streak = 0;

        loop {
            let line = self.read_line()?;

            if should_quit(&line) {
                debug!("quit requested");
                return None;
            }

            match parse_guess(&line) {
                Ok(guess) => return Some(guess),
                Err(err) => {
                    self.invalid_streak += 1;
                    debug!(%err, streak = self.invalid_streak, "re-prompting");

                    if self.invalid_streak >= REPROMPT_LIMIT {
                        warn!("too many invalid inputs, giving up");
                        return None;
                    }

                    let _ = writeln!(self.writer, "Please enter a whole number (or 'q' to quit).");
                }
            }
        }
    }
}
