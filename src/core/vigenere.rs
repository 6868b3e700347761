//! Vigenère cipher — a repeating keyword supplies per-position shifts

use crate::core::alphabet::{letter_shift, shift_letter};
use crate::core::util::sanitize;
use crate::enums::CipherMode;

/// Run Vigenère over the sanitized `text` using the sanitized `keyword`.
///
/// A keyword with no letters yields an empty string rather than an error.
pub fn vigenere(text: &str, keyword: &str, mode: CipherMode) -> String {
    let keyword = sanitize(keyword);
    if keyword.is_empty() {
        return String::new();
    }

    sanitize(text)
        .bytes()
        .zip(keyword.bytes().cycle())
        .map(|(b, k)| char::from(shift_letter(b, letter_shift(k), mode)))
        .collect()
}
