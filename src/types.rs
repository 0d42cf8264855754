//! Value objects shared by the sampler and the URL composer.

use std::fmt;
use std::ops::Range;

use crate::error::JemsError;

/// A validated request for `count` distinct integers in `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueRange {
    lower: i32,
    upper: i32,
    count: usize,
}

impl UniqueRange {
    /// Validate an explicit range.
    ///
    /// Zero is rejected for every argument, including the lower bound.
    /// Use [`UniqueRange::from_zero`] for a range starting at zero.
    pub fn new(lower: i32, upper: i32, count: i32) -> Result<Self, JemsError> {
        if lower < 1 {
            tracing::debug!(lower, "lower bound below one");
            return Err(JemsError::NegativeArgument);
        }
        Self::validate(lower, upper, count)
    }

    /// Validate a range whose lower bound is zero.
    pub fn from_zero(upper: i32, count: i32) -> Result<Self, JemsError> {
        Self::validate(0, upper, count)
    }

    fn validate(lower: i32, upper: i32, count: i32) -> Result<Self, JemsError> {
        if upper < 1 || count < 1 {
            tracing::debug!(upper, count, "upper bound or count below one");
            return Err(JemsError::NegativeArgument);
        }

        if lower >= upper {
            tracing::debug!(lower, upper, "lower bound not below upper bound");
            return Err(JemsError::BoundsOrder);
        }

        // lower >= 0 here, so the subtraction cannot overflow
        if count > upper || count > upper - lower {
            tracing::debug!(lower, upper, count, "range too small for count");
            return Err(JemsError::InsufficientRange);
        }

        Ok(Self {
            lower,
            upper,
            count: count as usize,
        })
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// Exclusive upper bound.
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Number of distinct values requested.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of integers in the range.
    pub fn size(&self) -> usize {
        (self.upper - self.lower) as usize
    }

    /// The half-open range as a `std::ops::Range`.
    pub fn as_range(&self) -> Range<i32> {
        self.lower..self.upper
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: i32) -> bool {
        self.as_range().contains(&value)
    }
}

/// A `key=value` pair to append to a URL query.
///
/// Neither side is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// Parameter key, never blank once validated.
    pub key: String,
    /// Textual form of the parameter value.
    pub value: String,
}

impl QueryParam {
    /// Build a pair from a key and any displayable value.
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_range_accessors() {
        let range = UniqueRange::new(5, 15, 3).unwrap();
        assert_eq!(range.lower(), 5);
        assert_eq!(range.upper(), 15);
        assert_eq!(range.count(), 3);
        assert_eq!(range.size(), 10);
        assert!(range.contains(5));
        assert!(!range.contains(15));
    }

    #[test]
    fn test_unique_range_rejects_zero_lower_bound() {
        assert_eq!(UniqueRange::new(0, 10, 3), Err(JemsError::NegativeArgument));
        assert!(UniqueRange::from_zero(10, 3).is_ok());
    }

    #[test]
    fn test_unique_range_failure_order() {
        assert_eq!(UniqueRange::new(1, 0, 1), Err(JemsError::NegativeArgument));
        assert_eq!(UniqueRange::new(1, 5, 0), Err(JemsError::NegativeArgument));
        assert_eq!(UniqueRange::new(5, 5, 1), Err(JemsError::BoundsOrder));
        assert_eq!(UniqueRange::new(6, 5, 1), Err(JemsError::BoundsOrder));
        assert_eq!(UniqueRange::new(3, 5, 3), Err(JemsError::InsufficientRange));
        assert_eq!(UniqueRange::from_zero(5, 6), Err(JemsError::InsufficientRange));
    }

    #[test]
    fn test_unique_range_full_range_allowed() {
        let range = UniqueRange::new(1, 11, 10).unwrap();
        assert_eq!(range.count(), range.size());
        assert_eq!(UniqueRange::from_zero(4, 4).unwrap().size(), 4);
    }

    #[test]
    fn test_query_param_display() {
        assert_eq!(QueryParam::new("page", 2).to_string(), "page=2");
        assert_eq!(QueryParam::new("q", "a%20b").to_string(), "q=a%20b");
    }
}
