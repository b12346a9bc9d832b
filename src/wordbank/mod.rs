//! Word bank loading and random selection
//!
//! Loads a plain-text word list once at startup (one word per line), keeps
//! only usable entries, and serves uniformly random picks with replacement.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Shortest word the game will use
pub const MIN_WORD_LEN: usize = 5;
/// Longest word the game will use
pub const MAX_WORD_LEN: usize = 12;

/// A read-only pool of candidate puzzle words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

/// Error type for an unusable word source
#[derive(Debug)]
pub enum WordBankError {
    /// The backing file is missing or unreadable
    Unreadable(io::Error),
    /// The source yielded zero qualifying words
    NoWords,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(err) => write!(f, "cannot read word list: {err}"),
            Self::NoWords => write!(
                f,
                "word list has no usable words ({MIN_WORD_LEN}-{MAX_WORD_LEN} letters)"
            ),
        }
    }
}

impl std::error::Error for WordBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable(err) => Some(err),
            Self::NoWords => None,
        }
    }
}

/// Check whether a (lowercased) word qualifies for play
fn qualifies(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_lowercase())
}

impl WordBank {
    /// Load a word bank from a file, one word per line
    ///
    /// Lines are trimmed and lowercased; entries outside the 5-12 letter
    /// range or containing non-letters are skipped.
    ///
    /// # Errors
    /// Returns `WordBankError::Unreadable` if the file cannot be read, or
    /// `WordBankError::NoWords` if nothing qualifies.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        let content = fs::read_to_string(path).map_err(WordBankError::Unreadable)?;

        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| qualifies(word));

        Self::from_words(words)
    }

    /// Build a word bank from an in-memory word iterator
    ///
    /// Applies the same qualification filter as [`WordBank::load`].
    ///
    /// # Errors
    /// Returns `WordBankError::NoWords` if nothing qualifies.
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Result<Self, WordBankError> {
        let words: Vec<String> = words.into_iter().filter(|w| qualifies(w)).collect();

        if words.is_empty() {
            return Err(WordBankError::NoWords);
        }

        Ok(Self { words })
    }

    /// Pick one word uniformly at random, with replacement across calls
    ///
    /// # Panics
    /// Will not panic - construction rejects empty banks.
    #[must_use]
    pub fn pick(&self) -> &str {
        use rand::prelude::IndexedRandom;

        self.words
            .choose(&mut rand::rng())
            .expect("bank is never empty")
    }

    /// Number of qualifying words in the bank
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the bank is empty (never true after construction)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
