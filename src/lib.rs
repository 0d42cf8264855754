//! JEMS - small, stateless helpers for everyday primitives
//!
//! This crate collects pure functions for three concerns:
//!
//! - **Unique sampling**: a fixed number of distinct random integers from a
//!   half-open range
//! - **URLs**: syntactic validation and appending query parameters while
//!   keeping the path and fragment intact
//! - **Null safety**: blank checks, trimmed case-insensitive equality, digit
//!   checks and sentinel defaults for absent numbers
//!
//! # Quick Start
//!
//! ```
//! use jems::{append_query, get_unique_random_numbers, is_blank, is_valid_url};
//!
//! // Six distinct numbers from 1..50
//! let numbers = get_unique_random_numbers(1, 50, 6)?;
//! assert_eq!(numbers.len(), 6);
//!
//! // Validate and extend a URL
//! assert!(is_valid_url("https://docs.rs/jems"));
//! let url = append_query("http://www.google.com?param1=value1#hash1", "param2", "value2")?;
//! assert_eq!(url, "http://www.google.com?param1=value1&param2=value2#hash1");
//!
//! assert!(is_blank(Some("  ")));
//! # Ok::<(), jems::JemsError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, JemsError>`. Every error is a
//! caller-contract violation detected before any output is produced:
//!
//! - Bounds or counts below one, inverted bounds, or ranges too small
//! - Blank or malformed URLs
//! - Blank query parameter keys
//!
//! # Logging
//!
//! Rejected inputs are reported through `tracing` at `debug` level and
//! sampling/composition progress at `trace` level. Install a subscriber to
//! see them.

// Re-export sampling
pub use self::core::{
    get_unique_random_numbers, get_unique_random_numbers_from_zero, RandomSource,
    SamplingStrategy, SeededRandom, ThreadRandom, UniqueRandomSampler,
};

// Re-export URL utilities
pub use self::url::{append_query, is_valid_url, UriParts};

// Re-export null-safe helpers
pub use numbers::NullSafe;
pub use strings::{are_equal, get_null_safe, is_blank, is_only_digits};

// Re-export public types
pub use error::JemsError;
pub use types::{QueryParam, UniqueRange};

// Module declarations
pub mod core;
pub mod error;
pub mod numbers;
pub mod strings;
pub mod types;
pub mod url;
