//! Guess parsing: text line in, validated integer out.

use crate::types::GameError;

/// Parse one line of input as a guess.
///
/// Leading/trailing whitespace is ignored. Anything that is not an `i64`
/// yields [`GameError::InvalidInput`] carrying the offending text.
pub fn parse_guess(line: &str) -> Result<i64, GameError> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GameError::InvalidInput(trimmed.to_string()))
}

/// Check whether a line asks to leave the game.
pub fn should_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "q" | "quit" | "exit")
}
