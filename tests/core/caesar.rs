// tests/core/caesar.rs
use crate::common::random_letters;
use classic_ciphers::core::caesar;
use classic_ciphers::CipherMode::{Decode, Encode};
use rand::Rng;

#[test]
fn test_caesar_sanitizes_then_shifts() {
    assert_eq!(caesar("Hello, World!", 3, Encode), "KHOORZRUOG");
    assert_eq!(caesar("KHOORZRUOG", 3, Decode), "HELLOWORLD");
}

#[test]
fn test_caesar_empty_and_letterless_input() {
    assert_eq!(caesar("", 5, Encode), "");
    assert_eq!(caesar("1234 !!", 5, Encode), "");
}

#[test]
fn test_caesar_negative_shift_matches_complement() {
    assert_eq!(caesar("abc", -1, Encode), "ZAB");
    assert_eq!(caesar("abc", -1, Encode), caesar("abc", 25, Encode));
    assert_eq!(caesar("XYZ", 3, Encode), "ABC");
}

#[test]
fn test_caesar_shift_is_periodic_in_26() {
    let text = "The quick brown fox jumps over the lazy dog";
    for shift in [-30i64, -3, 0, 7, 25] {
        for k in [-3i64, -1, 1, 4] {
            assert_eq!(
                caesar(text, shift, Encode),
                caesar(text, shift + 26 * k, Encode)
            );
            assert_eq!(
                caesar(text, shift, Decode),
                caesar(text, shift + 26 * k, Decode)
            );
        }
    }
}

#[test]
fn test_caesar_decode_inverts_encode_random() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(0..64);
        let text = random_letters(&mut rng, len);
        let shift = rng.random_range(-1_000i64..1_000);
        let encoded = caesar(&text, shift, Encode);
        assert_eq!(caesar(&encoded, shift, Decode), text, "shift={shift}");
    }
}

#[test]
fn test_caesar_extreme_shifts_do_not_overflow() {
    assert_eq!(caesar("A", i64::MAX, Encode), caesar("A", i64::MAX % 26, Encode));
    assert_eq!(caesar("A", i64::MIN, Decode).len(), 1);
}
