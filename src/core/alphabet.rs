//! The 26-letter ring `A..=Z` with modular shift arithmetic
//!
//! Caesar and Vigenère are both built on [`shift_letter`]; they differ only
//! in where each position's shift comes from.

use crate::consts::ALPHABET_LEN;
use crate::enums::CipherMode;

/// Reduce an arbitrary (possibly negative or huge) shift into `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid keeps negatives in range: -1 → 25
    shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Shift value carried by a key letter (`A` = 0 … `Z` = 25).
pub fn letter_shift(key_letter: u8) -> u8 {
    debug_assert!(key_letter.is_ascii_uppercase());
    key_letter - b'A'
}

/// Move an uppercase letter `shift` steps forward (encode) or back (decode).
///
/// `shift` must already be normalized into `0..26`.
pub fn shift_letter(letter: u8, shift: u8, mode: CipherMode) -> u8 {
    debug_assert!(letter.is_ascii_uppercase());
    debug_assert!(shift < ALPHABET_LEN);

    let offset = letter - b'A';
    let moved = match mode {
        CipherMode::Encode => (offset + shift) % ALPHABET_LEN,
        CipherMode::Decode => (offset + ALPHABET_LEN - shift) % ALPHABET_LEN,
    };
    b'A' + moved
}
