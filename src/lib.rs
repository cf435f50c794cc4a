//! CLI Guess (workspace facade crate).
//!
//! This package keeps a single `cli_guess::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use cli_guess_core as core;
pub use cli_guess_engine as engine;
pub use cli_guess_input as input;
pub use cli_guess_term as term;
pub use cli_guess_types as types;
