//! Caesar cipher — one fixed shift for every letter

use crate::core::alphabet::{normalize_shift, shift_letter};
use crate::core::util::sanitize;
use crate::enums::CipherMode;

/// Run Caesar over the sanitized `text`.
///
/// Any integer shift is accepted; `s` and `s + 26k` behave identically.
pub fn caesar(text: &str, shift: i64, mode: CipherMode) -> String {
    let shift = normalize_shift(shift);
    sanitize(text)
        .bytes()
        .map(|b| char::from(shift_letter(b, shift, mode)))
        .collect()
}
