//! Core game logic module - pure, deterministic, and testable
//!
//! This crate owns the guess engine: the hidden target, the attempt
//! counter, and the win/lose state machine. It has **zero dependencies**
//! on UI or I/O, making it:
//!
//! - **Deterministic**: randomness is injected through [`TargetSource`],
//!   so the same seed (or a fixed target) produces identical games
//! - **Testable**: every rule has a unit test next to it
//! - **Portable**: can be driven from a terminal, a script, or a test
//!
//! # Module Structure
//!
//! - [`game`]: [`GameState`] with `submit_guess` and the status machine
//! - [`rng`]: seeded ChaCha8 target drawing plus a fixed-value source
//!
//! # Example
//!
//! ```
//! use cli_guess_core::{GameRng, GameState};
//! use cli_guess_types::{AttemptBudget, Outcome, Status};
//!
//! let mut rng = GameRng::new(42);
//! let mut game = GameState::new(1, 10, AttemptBudget::Unbounded, &mut rng).unwrap();
//!
//! let target = game.target();
//! let outcome = game.submit_guess(target).unwrap();
//! assert_eq!(outcome, Outcome::Win);
//! assert_eq!(game.status(), Status::Won);
//! ```

pub mod game;
pub mod rng;

pub use cli_guess_types as types;

// Re-export commonly used types for convenience
pub use game::GameState;
pub use rng::{FixedTarget, GameRng, TargetSource};
