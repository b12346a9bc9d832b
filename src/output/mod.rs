//! Terminal output formatting
//!
//! Display utilities for the game loop, testable via injected writers.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_save_menu, print_state};
