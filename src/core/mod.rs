//! Unique random number sampling.
//!
//! - Pluggable, thread-safe random sources
//! - Validated sampling over half-open ranges

pub mod random;
pub mod sampler;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use sampler::{
    get_unique_random_numbers, get_unique_random_numbers_from_zero, SamplingStrategy,
    UniqueRandomSampler,
};
