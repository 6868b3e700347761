//! Row / column / rectangle substitution

use super::{segment, Digraph, KeySquare, Position};
use crate::consts::GRID_SIZE;
use crate::enums::CipherMode;

/// One step along a row or column, wrapping at the edge.
fn step(index: usize, mode: CipherMode) -> usize {
    match mode {
        CipherMode::Encode => (index + 1) % GRID_SIZE,
        CipherMode::Decode => (index + GRID_SIZE - 1) % GRID_SIZE,
    }
}

/// Substitute a single digraph.
///
/// Same row: move right (encode) or left (decode). Same column: move down
/// or up. Otherwise swap columns; that case is its own inverse and ignores
/// `mode`. Returns `None` if either letter is not in the square.
pub fn substitute(square: &KeySquare, digraph: Digraph, mode: CipherMode) -> Option<Digraph> {
    let a = square.position(digraph.first)?;
    let b = square.position(digraph.second)?;

    let (a, b) = if a.row == b.row {
        (
            Position { col: step(a.col, mode), ..a },
            Position { col: step(b.col, mode), ..b },
        )
    } else if a.col == b.col {
        (
            Position { row: step(a.row, mode), ..a },
            Position { row: step(b.row, mode), ..b },
        )
    } else {
        (
            Position { row: a.row, col: b.col },
            Position { row: b.row, col: a.col },
        )
    };

    Some(Digraph::new(square.letter_at(a), square.letter_at(b)))
}

/// Run Playfair over `text` with the square built from `keyword`.
///
/// The raw decode still carries fillers; see
/// [`clean_playfair_output`](super::clean_playfair_output).
pub fn playfair(text: &str, keyword: &str, mode: CipherMode) -> String {
    let square = KeySquare::from_keyword(keyword);
    let digraphs = segment(text);
    // Upper bound on pairs is the letter count.
    let (_, max_pairs) = digraphs.size_hint();
    let mut out = String::with_capacity(2 * max_pairs.unwrap_or(0));
    for digraph in digraphs.filter_map(|d| substitute(&square, d, mode)) {
        out.push(char::from(digraph.first));
        out.push(char::from(digraph.second));
    }
    out
}
