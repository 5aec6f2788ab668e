//! Randomness behind the lane spawn intervals.
//!
//! The controller never touches a global generator; it draws through an
//! [`IntervalSource`] so tests can substitute a seeded or scripted source.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies spawn intervals drawn uniformly from a half-open range.
pub trait IntervalSource {
    fn next_interval(&mut self, bounds: Range<Duration>) -> Duration;
}

/// Default seed used when a deterministic source is wanted without a seed.
const DEFAULT_SEED: u64 = 42;

/// `ChaCha8Rng` wrapper. Identical seeds produce identical interval sequences.
#[derive(Debug, Clone)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl IntervalSource for SimRng {
    fn next_interval(&mut self, bounds: Range<Duration>) -> Duration {
        let low = bounds.start.as_millis() as u64;
        let high = bounds.end.as_millis() as u64;
        Duration::from_millis(self.0.gen_range(low..high))
    }
}

/// Replays a fixed list of intervals and then keeps repeating the last one.
/// An empty script yields the lower bound. Values are returned as given,
/// including ones outside `bounds`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntervals(VecDeque<Duration>);

impl ScriptedIntervals {
    pub fn from_millis(script: &[u64]) -> Self {
        Self(script.iter().map(|&n| Duration::from_millis(n)).collect())
    }
}

impl IntervalSource for ScriptedIntervals {
    fn next_interval(&mut self, bounds: Range<Duration>) -> Duration {
        if self.0.len() > 1 {
            if let Some(next) = self.0.pop_front() {
                return next;
            }
        }
        self.0.front().copied().unwrap_or(bounds.start)
    }
}
