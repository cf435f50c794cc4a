//! Core types shared across the application.
//!
//! This module contains the data types every other crate agrees on: the
//! session status, per-guess outcomes, the attempt budget, and the error
//! enum. Apart from the error derive it has no behavior of its own.

use thiserror::Error;

/// Default guessing range (inclusive).
pub const DEFAULT_LOW: i64 = 1;
pub const DEFAULT_HIGH: i64 = 10;

/// Default number of guesses before a forced loss.
pub const DEFAULT_ATTEMPTS: u32 = 4;

/// Maximum number of consecutive unparseable inputs before the input
/// collaborator gives up re-prompting and treats the session as quit.
pub const REPROMPT_LIMIT: u32 = 32;

/// Session status.
///
/// Transitions are monotonic: `InProgress` moves to exactly one of the
/// terminal states and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    LostExhausted,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "in_progress",
            Status::Won => "won",
            Status::LostExhausted => "lost_exhausted",
        }
    }
}

/// Result of one submitted guess.
///
/// `Exhausted` carries the target so the renderer can reveal it; the other
/// variants refer to a game that is either still running or just won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooHigh,
    TooLow,
    Win,
    Exhausted { target: i64 },
}

impl Outcome {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::TooHigh => "too_high",
            Outcome::TooLow => "too_low",
            Outcome::Win => "win",
            Outcome::Exhausted { .. } => "exhausted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win | Outcome::Exhausted { .. })
    }
}

/// Attempt budget: how many guesses a session allows before a forced loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptBudget {
    Unbounded,
    Limited(u32),
}

impl AttemptBudget {
    /// True once `used` guesses have consumed the whole budget.
    pub fn is_spent(&self, used: u32) -> bool {
        match self {
            AttemptBudget::Unbounded => false,
            AttemptBudget::Limited(allowed) => used >= *allowed,
        }
    }

    pub fn limit(&self) -> Option<u32> {
        match self {
            AttemptBudget::Unbounded => None,
            AttemptBudget::Limited(allowed) => Some(*allowed),
        }
    }

    /// Parse a budget from string ("unbounded"/"unlimited" or a positive integer).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unbounded" | "unlimited" | "inf" => Some(AttemptBudget::Unbounded),
            other => match other.parse::<u32>() {
                Ok(n) if n > 0 => Some(AttemptBudget::Limited(n)),
                _ => None,
            },
        }
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        AttemptBudget::Limited(DEFAULT_ATTEMPTS)
    }
}

/// Errors shared by the engine and the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Construction-time failure: the guessing range is empty.
    #[error("invalid range: low ({low}) is greater than high ({high})")]
    InvalidRange { low: i64, high: i64 },

    /// Per-turn failure at the input boundary: text that does not parse
    /// as an integer. The session loop re-prompts on this.
    #[error("invalid input: {0:?} is not an integer")]
    InvalidInput(String),

    /// Precondition violation: `submit_guess` called on a finished game.
    #[error("game is already over (status: {})", status.as_str())]
    GameAlreadyOver { status: Status },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::LostExhausted.is_terminal());
    }

    #[test]
    fn test_outcome_as_str() {
        assert_eq!(Outcome::TooHigh.as_str(), "too_high");
        assert_eq!(Outcome::TooLow.as_str(), "too_low");
        assert_eq!(Outcome::Win.as_str(), "win");
        assert_eq!(Outcome::Exhausted { target: 7 }.as_str(), "exhausted");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::TooHigh.is_terminal());
        assert!(!Outcome::TooLow.is_terminal());
        assert!(Outcome::Win.is_terminal());
        assert!(Outcome::Exhausted { target: 1 }.is_terminal());
    }

    #[test]
    fn test_budget_spent() {
        let budget = AttemptBudget::Limited(4);
        assert!(!budget.is_spent(0));
        assert!(!budget.is_spent(3));
        assert!(budget.is_spent(4));
        assert!(budget.is_spent(5));

        assert!(!AttemptBudget::Unbounded.is_spent(u32::MAX));
    }

    #[test]
    fn test_budget_from_str() {
        assert_eq!(
            AttemptBudget::from_str("unbounded"),
            Some(AttemptBudget::Unbounded)
        );
        assert_eq!(
            AttemptBudget::from_str("Unlimited"),
            Some(AttemptBudget::Unbounded)
        );
        assert_eq!(
            AttemptBudget::from_str("4"),
            Some(AttemptBudget::Limited(4))
        );
        assert_eq!(AttemptBudget::from_str("0"), None);
        assert_eq!(AttemptBudget::from_str("four"), None);
    }

    #[test]
    fn test_budget_default() {
        assert_eq!(
            AttemptBudget::default(),
            AttemptBudget::Limited(DEFAULT_ATTEMPTS)
        );
    }

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidRange { low: 5, high: 1 };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("1"));

        let err = GameError::GameAlreadyOver {
            status: Status::Won,
        };
        assert!(err.to_string().contains("won"));
    }
}
