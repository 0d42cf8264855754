//! Error types for sampling and URL composition.

use thiserror::Error;

/// Errors returned by the helpers in this crate.
///
/// Every variant except [`JemsError::UrlParseError`] is a caller-contract
/// violation detected before any output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JemsError {
    /// The URL is blank or not syntactically valid.
    #[error("Fatal Error. 'url'. Invalid URL.")]
    InvalidUrl,

    /// The query parameter key is blank.
    #[error("Fatal Error. 'param'. Only non-empty string(s) are allowed as arguments.")]
    InvalidParam,

    /// A bound or the requested count is below one.
    #[error("Negative number is not allowed as an argument.")]
    NegativeArgument,

    /// The lower bound is not strictly below the upper bound.
    #[error("Lower Bound cannot be larger than Upper Bound.")]
    BoundsOrder,

    /// More unique values were requested than the range holds.
    #[error("Not enough unique numbers available for the array size.")]
    InsufficientRange,

    /// The `url` parser rejected the input. Produced by [`crate::UriParts::parse`].
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl JemsError {
    /// Whether this error belongs to the invalid-argument category.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, JemsError::UrlParseError(_))
    }
}

impl From<url::ParseError> for JemsError {
    fn from(err: url::ParseError) -> Self {
        JemsError::UrlParseError(err.to_string())
    }
}
