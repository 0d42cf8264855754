//! Query-string composition.

use std::fmt;

use crate::error::JemsError;
use crate::strings::is_blank;
use crate::types::QueryParam;
use crate::url::parts::UriParts;
use crate::url::validator::is_valid_url;

/// Append `key=value` to the query of `url`.
///
/// Existing pairs are kept in order and never de-duplicated; a non-blank
/// fragment stays after the query, a blank one is dropped. Neither `key` nor
/// `value` is percent-encoded.
///
/// # Errors
///
/// [`JemsError::InvalidUrl`] if `url` fails [`is_valid_url`], then
/// [`JemsError::InvalidParam`] if `key` is blank.
///
/// # Examples
///
/// ```
/// use jems::append_query;
///
/// let url = append_query("http://www.google.com#hash1", "param2", "value2")?;
/// assert_eq!(url, "http://www.google.com?param2=value2#hash1");
///
/// let url = append_query("http://www.google.com?param1=value1", "page", 2)?;
/// assert_eq!(url, "http://www.google.com?param1=value1&page=2");
/// # Ok::<(), jems::JemsError>(())
/// ```
pub fn append_query<'a, 'b>(
    url: impl Into<Option<&'a str>>,
    key: impl Into<Option<&'b str>>,
    value: impl fmt::Display,
) -> Result<String, JemsError> {
    let url = url.into();
    if !is_valid_url(url) {
        return Err(JemsError::InvalidUrl);
    }

    let key = key.into();
    if is_blank(key) {
        tracing::debug!("query key rejected: blank");
        return Err(JemsError::InvalidParam);
    }

    let param = QueryParam::new(key.unwrap_or_default(), value);
    let mut parts = UriParts::parse(url.unwrap_or_default())?;

    let query = match parts.query() {
        Some(existing) if !is_blank(Some(existing)) => format!("{}&{}", existing, param),
        _ => param.to_string(),
    };
    parts.set_query(Some(query));

    if is_blank(parts.fragment()) {
        parts.set_fragment(None);
    }

    let composed = parts.to_string();
    tracing::trace!(url = %composed, "query appended");
    Ok(composed)
}
