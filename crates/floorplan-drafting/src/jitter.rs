//! Randomness used for opening placement.
//!
//! Placement draws offsets from uniform intervals. The source is injected so
//! callers choose between a seeded generator (reproducible drawings), an
//! entropy-seeded one, or [`CenteredJitter`] for fully deterministic output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples.
pub trait Jitter {
    /// Sample uniformly from `[low, high]`. Returns `low` when the interval
    /// is empty or degenerate.
    fn sample(&mut self, low: f64, high: f64) -> f64;
}

/// [`Jitter`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        // Also catches NaN bounds.
        if !(low < high) {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Always returns the midpoint of the interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenteredJitter;

impl Jitter for CenteredJitter {
    fn sample(&mut self, low: f64, high: f64) -> f64 {
        if !(low < high) {
            return low;
        }
        (low + high) / 2.0
    }
}
