//! Playfair — digraph substitution over a 5×5 key square
//!
//! ```text
//! keyword ──► KeySquare ─┐
//!                         ├─► substitute (row / column / rectangle) ──► text
//! text ─────► segment ───┘
//! ```
//!
//! Decoding additionally runs [`clean_playfair_output`] at the dispatch
//! layer to strip the fillers the segmenter inserted.

pub mod cleanup;
pub mod digraph;
pub mod key_square;
pub mod transform;

pub use cleanup::clean_playfair_output;
pub use digraph::{segment, Digraph, Digraphs};
pub use key_square::{KeySquare, Position};
pub use transform::{playfair, substitute};

use crate::consts::{FOLDED_LETTER, FOLD_TARGET};

/// Playfair has no J: read it as I.
pub(crate) fn fold_j(letter: u8) -> u8 {
    if letter == FOLDED_LETTER {
        FOLD_TARGET
    } else {
        letter
    }
}
