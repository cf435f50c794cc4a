//! Input module (engine-facing).
//!
//! Turns raw text lines into validated guesses. Parsing is an explicit
//! step with a typed error, and the prompt loop re-prompts on bad input
//! instead of terminating the game.

pub mod parse;
pub mod prompt;

pub use cli_guess_types as types;

pub use parse::{parse_guess, should_quit};
pub use prompt::LinePrompt;
