//! Unique random sampling over a half-open integer range.

use std::collections::HashSet;

use crate::core::random::{RandomSource, ThreadRandom};
use crate::error::JemsError;
use crate::types::UniqueRange;

/// Algorithm used to pick the distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Draw repeatedly, discarding duplicates, until `count` values are held.
    #[default]
    Rejection,
    /// Floyd's algorithm: exactly `count` draws regardless of range density.
    Floyd,
}

/// Produces sets of distinct integers from a [`RandomSource`].
///
/// # Examples
///
/// ```
/// use jems::{SamplingStrategy, SeededRandom, UniqueRandomSampler};
///
/// let sampler = UniqueRandomSampler::with_source(SeededRandom::new(1))
///     .with_strategy(SamplingStrategy::Floyd);
///
/// let values = sampler.sample(10, 20, 5)?;
/// assert_eq!(values.len(), 5);
/// assert!(values.iter().all(|v| (10..20).contains(v)));
/// # Ok::<(), jems::JemsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UniqueRandomSampler<R = ThreadRandom> {
    source: R,
    strategy: SamplingStrategy,
}

impl UniqueRandomSampler<ThreadRandom> {
    /// Create a sampler using the thread-local RNG and rejection sampling.
    pub fn new() -> Self {
        Self::with_source(ThreadRandom)
    }
}

impl Default for UniqueRandomSampler<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> UniqueRandomSampler<R> {
    /// Create a sampler drawing from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            strategy: SamplingStrategy::default(),
        }
    }

    /// Select the sampling algorithm.
    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured algorithm.
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Return `count` distinct integers from `[lower, upper)`.
    ///
    /// Fails when any argument is below one, when `lower >= upper`, or when
    /// the range holds fewer than `count` integers.
    pub fn sample(&self, lower: i32, upper: i32, count: i32) -> Result<Vec<i32>, JemsError> {
        let range = UniqueRange::new(lower, upper, count)?;
        Ok(self.sample_range(&range))
    }

    /// Return `count` distinct integers from `[0, upper)`.
    pub fn sample_from_zero(&self, upper: i32, count: i32) -> Result<Vec<i32>, JemsError> {
        let range = UniqueRange::from_zero(upper, count)?;
        Ok(self.sample_range(&range))
    }

    /// Sample an already validated range. Output order is unspecified.
    pub fn sample_range(&self, range: &UniqueRange) -> Vec<i32> {
        let picked = match self.strategy {
            SamplingStrategy::Rejection => self.rejection(range),
            SamplingStrategy::Floyd => self.floyd(range),
        };
        picked.into_iter().collect()
    }

    fn rejection(&self, range: &UniqueRange) -> HashSet<i32> {
        let mut picked = HashSet::with_capacity(range.count());
        let mut draws: u64 = 0;

        while picked.len() < range.count() {
            picked.insert(self.source.next_in_range(range.as_range()));
            draws += 1;
        }

        tracing::trace!(
            lower = range.lower(),
            upper = range.upper(),
            count = range.count(),
            draws,
            "rejection sampling finished"
        );
        picked
    }

    fn floyd(&self, range: &UniqueRange) -> HashSet<i32> {
        let mut picked = HashSet::with_capacity(range.count());
        let size = range.upper() - range.lower();
        let start = size - range.count() as i32;

        for j in start..size {
            let candidate = range.lower() + self.source.next_in_range(0..j + 1);
            if !picked.insert(candidate) {
                picked.insert(range.lower() + j);
            }
        }

        tracing::trace!(
            lower = range.lower(),
            upper = range.upper(),
            count = range.count(),
            "floyd sampling finished"
        );
        picked
    }
}

/// Return `count` distinct integers from `[lower, upper)` using the default sampler.
///
/// # Examples
///
/// ```
/// use jems::get_unique_random_numbers;
///
/// let values = get_unique_random_numbers(1, 50, 6)?;
/// assert_eq!(values.len(), 6);
///
/// assert!(get_unique_random_numbers(0, 50, 6).is_err());
/// # Ok::<(), jems::JemsError>(())
/// ```
pub fn get_unique_random_numbers(lower: i32, upper: i32, count: i32) -> Result<Vec<i32>, JemsError> {
    UniqueRandomSampler::new().sample(lower, upper, count)
}

/// Return `count` distinct integers from `[0, upper)` using the default sampler.
///
/// Unlike [`get_unique_random_numbers`], a zero lower bound is accepted here.
pub fn get_unique_random_numbers_from_zero(upper: i32, count: i32) -> Result<Vec<i32>, JemsError> {
    UniqueRandomSampler::new().sample_from_zero(upper, count)
}
