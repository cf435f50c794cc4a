//! Terminal output module.
//!
//! Renders session events as console text. The view writes into any
//! `Write` sink so tests can capture output, and styling can be disabled
//! for non-tty targets.
//!
//! Wording follows the classic exercise: "Too high", "Too low",
//! "You're the winner", "Game Over: Too many guesses!".

pub mod view;

pub use cli_guess_core as core;
pub use cli_guess_types as types;

pub use view::ConsoleView;
