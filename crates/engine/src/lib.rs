//! Session driver - the loop around the guess engine.
//!
//! The core engine only evaluates one guess at a time; this crate owns the
//! driving loop from creation to terminal status. The loop is deliberately
//! iterative: a recursive retry formulation would grow the stack on long
//! unbounded sessions.
//!
//! The loop talks to two collaborators:
//!
//! - a [`GuessSource`] that yields one parsed guess per turn (or signals
//!   quit/end-of-input),
//! - an [`OutcomeSink`] that renders each outcome.
//!
//! One subtlety is preserved from the bounded game: once the attempt
//! budget is spent, the driver does NOT ask the source for another guess.
//! The next `submit_guess` call terminates the game as exhausted on its
//! entry check, so prompting again would be both pointless and wrong.

pub mod session;

pub use cli_guess_core as core;
pub use cli_guess_types as types;

pub use session::{GuessSource, OutcomeSink, Session, SessionEnd};
