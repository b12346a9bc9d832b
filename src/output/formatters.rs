//! Formatting utilities for terminal output

use crate::core::{GuessLog, Puzzle};
use crate::session::MAX_INCORRECT;

/// Format the puzzle as space-separated cells, one per letter
///
/// Revealed letters show through; the rest render as `_`.
#[must_use]
pub fn masked_line(puzzle: &Puzzle) -> String {
    let mut line = String::with_capacity(puzzle.word().len() * 2);
    for ch in puzzle.render() {
        line.push(' ');
        line.push(ch);
    }
    line
}

/// Format the incorrect-guess line with the miss budget
///
/// Only called when the log is non-empty.
#[must_use]
pub fn misses_line(log: &GuessLog) -> String {
    let mut line = format!("Incorrect Guesses (Max: {MAX_INCORRECT}):");
    for &ch in log.misses() {
        line.push(' ');
        line.push(ch);
    }
    line
}
