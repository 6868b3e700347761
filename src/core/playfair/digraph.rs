//! Splitting text into the letter pairs Playfair works on

use std::fmt;

use super::fold_j;
use crate::consts::FILLER;
use crate::core::util::sanitize;

/// An ordered pair of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    pub first: u8,
    pub second: u8,
}

impl Digraph {
    pub fn new(first: u8, second: u8) -> Self {
        Digraph { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(self.first), char::from(self.second))
    }
}

/// Lazy digraph stream produced by [`segment`].
#[derive(Debug, Clone)]
pub struct Digraphs {
    letters: Vec<u8>,
    cursor: usize,
}

impl Iterator for Digraphs {
    type Item = Digraph;

    fn next(&mut self) -> Option<Digraph> {
        let &first = self.letters.get(self.cursor)?;
        match self.letters.get(self.cursor + 1) {
            Some(&second) if second != first => {
                self.cursor += 2;
                Some(Digraph::new(first, second))
            }
            // Repeat or lone trailing letter: pair with the filler. On a
            // repeat only one letter is consumed so the duplicate starts
            // the next pair.
            _ => {
                self.cursor += 1;
                Some(Digraph::new(first, FILLER))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.letters.len() - self.cursor.min(self.letters.len());
        (left.div_ceil(2), Some(left))
    }
}

/// Sanitize `text`, read J as I, and split it into digraphs.
///
/// `"HELLO"` becomes `HE LX LO`. A pair is only ever doubled when the
/// filler itself repeats (`"XX"`), since there is no second filler.
pub fn segment(text: &str) -> Digraphs {
    Digraphs {
        letters: sanitize(text).bytes().map(fold_j).collect(),
        cursor: 0,
    }
}
