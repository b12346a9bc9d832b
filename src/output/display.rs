//! Display functions for the game loop
//!
//! All functions write to a caller-supplied stream so the session can be
//! exercised in tests without a terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;

use super::formatters::{masked_line, misses_line};
use crate::core::{GuessLog, Puzzle};

/// Print the masked word and, when any exist, the incorrect guesses
pub fn print_state<W: Write>(out: &mut W, puzzle: &Puzzle, log: &GuessLog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", masked_line(puzzle))?;
    writeln!(out)?;

    if !log.is_empty() {
        writeln!(out, "{}", misses_line(log))?;
    }
    Ok(())
}

/// Print the indexed menu of available save files
pub fn print_save_menu<W: Write>(out: &mut W, saves: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "Save files found:")?;
    for (i, path) in saves.iter().enumerate() {
        writeln!(out, "[{i}] {}", path.display())?;
    }
    Ok(())
}

/// Announce the final outcome of a round
pub fn print_outcome<W: Write>(out: &mut W, won: bool) -> io::Result<()> {
    if won {
        writeln!(out, "{}", "You win!".bright_green().bold())
    } else {
        writeln!(out, "{}", "You ran out of guesses!".red().bold())
    }
}
