//! Game state module - one bounded guessing session
//!
//! A [`GameState`] owns the hidden target, counts attempts against the
//! configured budget, and moves through the status machine:
//!
//! ```text
//! InProgress --(correct guess)-------> Won
//! InProgress --(budget exceeded)-----> LostExhausted
//! InProgress --(wrong guess, budget left)--> InProgress
//! ```
//!
//! Terminal states are absorbing; calling [`GameState::submit_guess`] on a
//! finished game is a precondition violation and returns an error without
//! mutating anything.

use tracing::debug;

use crate::rng::TargetSource;
use crate::types::{AttemptBudget, GameError, Outcome, Status};

/// Complete state of one guessing session.
///
/// Created when the session starts (target drawn once), mutated once per
/// submitted guess, discarded once the status leaves `InProgress`.
#[derive(Debug, Clone)]
pub struct GameState {
    low: i64,
    high: i64,
    target: i64,
    attempts_used: u32,
    budget: AttemptBudget,
    status: Status,
}

impl GameState {
    /// Create a new game with a target drawn from `[low, high]` (inclusive).
    ///
    /// The randomness is injected: the engine itself never owns an RNG, so
    /// tests can pin the target with [`crate::FixedTarget`].
    pub fn new(
        low: i64,
        high: i64,
        budget: AttemptBudget,
        source: &mut dyn TargetSource,
    ) -> Result<Self, GameError> {
        if low > high {
            return Err(GameError::InvalidRange { low, high });
        }

        let target = source.draw_target(low, high);
        debug_assert!((low..=high).contains(&target));

        debug!(low, high, budget = ?budget, "new game created");

        Ok(Self {
            low,
            high,
            target,
            attempts_used: 0,
            budget,
            status: Status::InProgress,
        })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// The hidden target. Drawn once at construction, never re-rolled.
    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn budget(&self) -> AttemptBudget {
        self.budget
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True while the session can still accept a fresh guess.
    ///
    /// Once this turns false the next `submit_guess` call terminates the
    /// game as exhausted without evaluating its argument, so drivers
    /// should stop prompting for input when this is false.
    pub fn has_attempts_remaining(&self) -> bool {
        self.status == Status::InProgress && !self.budget.is_spent(self.attempts_used)
    }

    /// Submit one guess and advance the state machine.
    ///
    /// The exhaustion check happens on entry, before the guess is looked
    /// at: if the budget was already spent by previous attempts, the game
    /// terminates as `Exhausted` and the guess value is never compared.
    /// This preserves the check-then-prompt ordering of the bounded game:
    /// the Nth allowed guess is attempt N, and attempt N+1 is rejected
    /// outright.
    pub fn submit_guess(&mut self, guess: i64) -> Result<Outcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver {
                status: self.status,
            });
        }

        let budget_was_spent = self.budget.is_spent(self.attempts_used);
        self.attempts_used += 1;

        if budget_was_spent {
            self.status = Status::LostExhausted;
            debug!(
                attempts_used = self.attempts_used,
                target = self.target,
                "attempt budget exceeded"
            );
            return Ok(Outcome::Exhausted {
                target: self.target,
            });
        }

        let outcome = match guess.cmp(&self.target) {
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Equal => {
                self.status = Status::Won;
                Outcome::Win
            }
        };

        debug!(
            guess,
            attempts_used = self.attempts_used,
            outcome = outcome.as_str(),
            "guess evaluated"
        );

        Ok(outcome)
    }
}
