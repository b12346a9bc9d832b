//! Core domain types for hangman
//!
//! This module contains the fundamental game types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod guess_log;
mod puzzle;

pub use guess_log::GuessLog;
pub use puzzle::{PLACEHOLDER, Puzzle, PuzzleError};
