//! Pure validators over candidate input strings.
//!
//! These are deterministic, side-effect-free functions; the interactive
//! prompt loops in [`crate::prompt`] call them and re-prompt on failure.
//! Positive decimal amounts are validated by [`crate::money::Amount::parse`]
//! and identifier uniqueness by [`crate::employee::Registry::is_unique`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
    static ref NAME: Regex = Regex::new(r"^[A-Za-z ]+$").unwrap();
}

/// True iff the string is non-empty and every character is a letter or digit.
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// True iff the string contains only letters and spaces, with at least one
/// letter. Empty or all-spaces strings are invalid.
pub fn is_valid_name(s: &str) -> bool {
    NAME.is_match(s) && s.chars().any(|c| c.is_ascii_alphabetic())
}

/// Parses a strictly positive integer count.
///
/// The string must be non-empty, contain no whitespace anywhere, and consist
/// of digits only. Leading zeros are fine (`"007"` parses to 7). Values that
/// do not fit in a `u32` are rejected like any other invalid input.
pub fn parse_positive_integer(s: &str) -> Option<u32> {
    if s.is_empty() || s.contains(char::is_whitespace) {
        return None;
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
