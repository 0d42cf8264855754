//! Random source abstraction for sampling.
//!
//! Implementations must be safe to share across threads; every call draws
//! independently of every other call.

use std::ops::Range;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Draw an integer uniformly from the half-open `range`.
    ///
    /// `range` is never empty.
    fn next_in_range(&self, range: Range<i32>) -> i32;
}

/// Process-wide random source backed by the thread-local RNG.
///
/// Uses `rand::rng()`, so there is nothing to initialize or tear down.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&self, range: Range<i32>) -> i32 {
        rand::rng().random_range(range)
    }
}

/// Deterministic random source seeded from a `u64`.
///
/// Draws are serialized through a mutex, so sharing one instance across
/// threads is safe but the interleaving is not reproducible.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source that replays the same sequence for the same seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&self, range: Range<i32>) -> i32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(range)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn next_in_range(&self, range: Range<i32>) -> i32 {
        (**self).next_in_range(range)
    }
}
