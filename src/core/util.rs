//! Small utility functions used across the core module
//!
//! Sanitization lives here because every cipher starts with it.
//! Keep this light — if it grows, split further.

/// Drop every non-letter and upper-case the rest.
///
/// Only ASCII letters survive; the output is always a subset of `A..=Z`
/// in input order, and sanitizing twice changes nothing.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
