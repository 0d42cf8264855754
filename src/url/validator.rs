//! Syntactic URL validation.

use url::Url;

use crate::strings::is_blank;

/// Check whether a string is a syntactically valid absolute URL.
///
/// Any scheme is accepted as long as the rest parses. Blank input, missing
/// schemes, surrounding whitespace and control characters anywhere in the
/// input are rejected. The `url` parser strips tabs and newlines, so those
/// are checked before parsing.
///
/// # Examples
///
/// ```
/// use jems::is_valid_url;
///
/// assert!(is_valid_url("http://userid@example.com"));
/// assert!(is_valid_url("ftp://foo.bar/baz"));
/// assert!(!is_valid_url("www.example.com/main.html"));
/// assert!(!is_valid_url(None::<&str>));
/// ```
pub fn is_valid_url<'a>(url: impl Into<Option<&'a str>>) -> bool {
    let url = url.into();
    if !is_parseable_text(url) {
        return false;
    }

    match Url::parse(url.unwrap_or_default()) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(error = %err, "url rejected by parser");
            false
        }
    }
}

/// Text-level checks run before the `url` parser sees the input.
pub(crate) fn is_parseable_text(url: Option<&str>) -> bool {
    if is_blank(url) {
        return false;
    }
    let url = url.unwrap_or_default();

    if url.chars().any(char::is_control) {
        tracing::debug!("url rejected: contains control characters");
        return false;
    }

    if url.trim() != url {
        tracing::debug!("url rejected: surrounding whitespace");
        return false;
    }

    true
}
