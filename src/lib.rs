//! Hangman
//!
//! A terminal word-guessing game with save/resume support. A random 5-12
//! letter word is drawn from a word list; the player guesses letters and
//! loses after 6 misses. Mid-game state can be saved to a JSON file and
//! resumed later.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessLog, Puzzle};
//!
//! let mut puzzle = Puzzle::new("mango").unwrap();
//! let mut log = GuessLog::new();
//!
//! assert!(puzzle.guess('m'));     // hit
//! assert!(!puzzle.guess('z'));    // miss
//! log.record('z');
//!
//! assert_eq!(puzzle.render(), vec!['m', '_', '_', '_', '_']);
//! ```

// Core domain types
pub mod core;

// Word list loading and random selection
pub mod wordbank;

// Save/resume persistence
pub mod saves;

// Turn loop and input grammar
pub mod session;

// Terminal output formatting
pub mod output;
