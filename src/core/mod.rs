// src/core/mod.rs
//! The cipher engine — pure text transformations, no I/O, no state
//!
//! Every function here is a plain function of its arguments. Nothing is
//! cached between calls; callers that need to reuse a Playfair square can
//! build a [`KeySquare`] once and hold on to it.

pub mod alphabet;
pub mod caesar;
pub mod playfair;
pub mod util;
pub mod vigenere;

pub use alphabet::{normalize_shift, shift_letter};
pub use caesar::caesar;
pub use playfair::{clean_playfair_output, playfair, segment, Digraph, KeySquare, Position};
pub use util::sanitize;
pub use vigenere::vigenere;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
