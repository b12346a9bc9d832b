//! Session control
//!
//! The turn-loop state machine and the input grammar it accepts.

mod controller;
pub mod input;

pub use controller::{MAX_INCORRECT, Outcome, Session};
