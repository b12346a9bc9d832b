//! Save/resume persistence
//!
//! JSON save records written to a per-game file in a save directory.

mod record;
mod store;

pub use record::SaveRecord;
pub use store::{LoadError, SaveStore};
