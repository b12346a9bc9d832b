//! Chronological record of incorrect guesses
//!
//! The miss count is stored alongside the list rather than derived from it,
//! because save files carry both fields and loads take them verbatim.

/// Ordered log of missed letters with a running count
///
/// Duplicate misses of the same letter are appended again; the count grows
/// with every miss, capped by nothing here (the session enforces the budget).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessLog {
    misses: Vec<char>,
    count: usize,
}

impl GuessLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from saved misses and a saved count
    ///
    /// Both values come straight from the save file; the count is not
    /// recomputed from the list.
    #[must_use]
    pub fn restore(misses: Vec<char>, count: usize) -> Self {
        Self { misses, count }
    }

    /// Record one miss
    pub fn record(&mut self, ch: char) {
        self.misses.push(ch);
        self.count += 1;
    }

    /// Missed letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn misses(&self) -> &[char] {
        &self.misses
    }

    /// Number of misses so far
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Check whether any miss has been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.misses.is_empty()
    }
}
