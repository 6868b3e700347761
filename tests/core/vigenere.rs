// tests/core/vigenere.rs
use crate::common::random_letters;
use classic_ciphers::core::vigenere;
use classic_ciphers::CipherMode::{Decode, Encode};
use rand::Rng;

#[test]
fn test_vigenere_classic_vector() {
    assert_eq!(vigenere("ATTACKATDAWN", "LEMON", Encode), "LXFOPVEFRNHR");
    assert_eq!(vigenere("LXFOPVEFRNHR", "LEMON", Decode), "ATTACKATDAWN");
}

#[test]
fn test_vigenere_sanitizes_text_and_keyword() {
    assert_eq!(
        vigenere("attack at dawn!", "le-mon 7", Encode),
        "LXFOPVEFRNHR"
    );
}

#[test]
fn test_vigenere_empty_keyword_yields_empty_string() {
    assert_eq!(vigenere("ATTACKATDAWN", "", Encode), "");
    assert_eq!(vigenere("ATTACKATDAWN", "123 !", Decode), "");
    assert_eq!(vigenere("", "", Encode), "");
}

#[test]
fn test_vigenere_keyword_a_is_identity() {
    assert_eq!(vigenere("Hello", "a", Encode), "HELLO");
}

#[test]
fn test_vigenere_single_letter_keyword_matches_caesar() {
    use classic_ciphers::core::caesar;
    assert_eq!(vigenere("hello world", "D", Encode), caesar("hello world", 3, Encode));
}

#[test]
fn test_vigenere_decode_inverts_encode_random() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let text_len = rng.random_range(0..64);
        let key_len = rng.random_range(1..12);
        let text = random_letters(&mut rng, text_len);
        let key = random_letters(&mut rng, key_len);
        let encoded = vigenere(&text, &key, Encode);
        assert_eq!(vigenere(&encoded, &key, Decode), text, "key={key}");
    }
}
