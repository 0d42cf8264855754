//! Null-safe string predicates.
//!
//! A "blank" string is `None`, empty, or made only of whitespace as defined by
//! [`char::is_whitespace`].

/// Return the string itself, or `""` when absent.
///
/// # Examples
///
/// ```
/// use jems::strings::get_null_safe;
///
/// assert_eq!(get_null_safe(Some("Hello")), "Hello");
/// assert_eq!(get_null_safe(None), "");
/// ```
pub fn get_null_safe(string: Option<&str>) -> &str {
    string.unwrap_or("")
}

/// Check whether a string is blank.
///
/// # Examples
///
/// ```
/// use jems::strings::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("")));
/// assert!(is_blank(Some(" \t\n")));
/// assert!(!is_blank(Some("something ")));
/// ```
pub fn is_blank(string: Option<&str>) -> bool {
    get_null_safe(string).chars().all(char::is_whitespace)
}

/// Compare two strings, ignoring case and surrounding whitespace.
///
/// Two blank strings are equal to each other and to nothing else.
///
/// # Examples
///
/// ```
/// use jems::strings::are_equal;
///
/// assert!(are_equal(None, Some("   ")));
/// assert!(are_equal(Some(" abc"), Some("ABC ")));
/// assert!(!are_equal(Some("ab c"), Some("abc")));
/// assert!(!are_equal(Some(""), Some("abc")));
/// ```
pub fn are_equal(first: Option<&str>, second: Option<&str>) -> bool {
    match (first, second) {
        (a, b) if is_blank(a) && is_blank(b) => true,
        (Some(a), Some(b)) if !is_blank(Some(a)) && !is_blank(Some(b)) => {
            a.trim().to_lowercase() == b.trim().to_lowercase()
        }
        _ => false,
    }
}

/// Check whether a string is non-blank and made only of ASCII digits.
///
/// # Examples
///
/// ```
/// use jems::strings::is_only_digits;
///
/// assert!(is_only_digits(Some("17650")));
/// assert!(!is_only_digits(Some("11.67")));
/// assert!(!is_only_digits(None));
/// ```
pub fn is_only_digits(string: Option<&str>) -> bool {
    match string {
        Some(s) if !is_blank(Some(s)) => s.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_unicode_whitespace() {
        // NBSP and ideographic space
        assert!(is_blank(Some("\u{00A0}\u{3000}")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn test_are_equal_one_side_blank() {
        assert!(!are_equal(None, Some("abc")));
        assert!(!are_equal(Some("abc"), Some("  ")));
        assert!(are_equal(Some(""), Some("")));
    }

    #[test]
    fn test_is_only_digits_rejects_padding() {
        assert!(!is_only_digits(Some(" 123")));
        assert!(!is_only_digits(Some("123 ")));
        assert!(!is_only_digits(Some("-1")));
    }
}
