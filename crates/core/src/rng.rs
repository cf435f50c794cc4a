//! Target drawing - injected randomness for the guess engine.
//!
//! The engine never embeds a random number generator. It asks a
//! [`TargetSource`] for one value at construction time, which keeps games
//! reproducible (seeded [`GameRng`]) and lets tests pin the target exactly
//! ([`FixedTarget`]).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies the hidden target for a new game.
///
/// Called exactly once per game with the inclusive range bounds. Callers
/// guarantee `low <= high`.
pub trait TargetSource {
    fn draw_target(&mut self, low: i64, high: i64) -> i64;
}

/// Deterministic RNG for target drawing.
///
/// Uses ChaCha8 for speed with a reproducible sequence: the same seed
/// produces the same targets across runs and platforms.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was built from (for replaying a game).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TargetSource for GameRng {
    fn draw_target(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }
}

/// Target source that always yields the same value.
///
/// Used by tests and scripted sessions; the value is clamped into the
/// requested range so a misconfigured fixture cannot break the range
/// invariant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn draw_target(&mut self, low: i64, high: i64) -> i64 {
        self.0.clamp(low, high)
    }
}
