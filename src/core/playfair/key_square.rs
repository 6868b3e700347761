//! Key square construction and position lookup

use std::fmt;

use super::fold_j;
use crate::consts::{ALPHABET_LEN, FOLDED_LETTER, GRID_CELLS, GRID_SIZE};
use crate::core::util::sanitize;

/// Cell coordinates inside a [`KeySquare`], both in `0..5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    fn from_index(index: usize) -> Self {
        Position {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }
}

/// A 5×5 grid holding each letter `A..=Z` except `J` exactly once.
///
/// Built once from a keyword and read-only afterwards. A reverse index is
/// kept alongside the grid so lookups do not scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Position>; ALPHABET_LEN as usize],
}

impl KeySquare {
    /// Keyword letters first (deduplicated, J read as I), then the rest of
    /// the alphabet in order, laid out row-major.
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = sanitize(keyword);
        let remaining = (b'A'..=b'Z').filter(|&c| c != FOLDED_LETTER);

        let mut seen = [false; ALPHABET_LEN as usize];
        let fill_order: Vec<u8> = keyword
            .bytes()
            .map(fold_j)
            .chain(remaining)
            .filter(|&letter| !std::mem::replace(&mut seen[usize::from(letter - b'A')], true))
            .collect();
        debug_assert_eq!(fill_order.len(), GRID_CELLS);

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; ALPHABET_LEN as usize];
        for (index, &letter) in fill_order.iter().enumerate() {
            let pos = Position::from_index(index);
            cells[pos.row][pos.col] = letter;
            positions[usize::from(letter - b'A')] = Some(pos);
        }

        KeySquare { cells, positions }
    }

    /// Where `letter` sits in the square (J is looked up as I).
    ///
    /// `None` only for bytes outside `A..=Z`, which sanitized input never
    /// contains.
    pub fn position(&self, letter: u8) -> Option<Position> {
        let letter = fold_j(letter);
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.positions[usize::from(letter - b'A')]
    }

    pub fn letter_at(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// The 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl Default for KeySquare {
    fn default() -> Self {
        KeySquare::from_keyword("")
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &letter) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}
