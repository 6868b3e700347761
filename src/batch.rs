// src/batch.rs
//! Newline-delimited JSON processing — one request line in, one response line out

use std::io::{BufRead, Write};
use tracing::debug;

use crate::core::Result;
use crate::request::handle_json;

/// Counts of successful and failed responses written by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub ok: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.ok + self.failed
    }
}

/// Answer every non-blank input line with exactly one compact JSON line.
///
/// A malformed line gets an `{"error"}` response and processing continues.
/// Only I/O failures stop the run.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_json(&line);
        if response.is_ok() {
            summary.ok += 1;
        } else {
            summary.failed += 1;
            debug!(line = index + 1, "request answered with an error");
        }
        writeln!(output, "{}", response.to_json()?)?;
    }

    output.flush()?;
    Ok(summary)
}
