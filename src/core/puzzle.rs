//! Puzzle state for a single hangman round
//!
//! A Puzzle stores the secret word and the set of distinct letters the player
//! has not yet guessed correctly.

use rustc_hash::FxHashSet;
use std::fmt;

/// Placeholder shown for letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

/// The secret word plus the letters still pending a correct guess
///
/// The word is immutable for the lifetime of the puzzle; only `pending`
/// shrinks as the player scores hits. An empty `pending` set means the
/// puzzle is won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    word: String,
    pending: FxHashSet<char>,
}

/// Error type for invalid puzzle words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    EmptyWord,
    InvalidCharacters,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Puzzle word must not be empty"),
            Self::InvalidCharacters => {
                write!(f, "Puzzle word must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a new Puzzle from a secret word
    ///
    /// The pending set starts as every distinct letter of the word.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the word is empty or contains
    /// non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("mango").unwrap();
    /// assert_eq!(puzzle.word(), "mango");
    /// assert!(!puzzle.is_won());
    ///
    /// assert!(Puzzle::new("").is_err());
    /// assert!(Puzzle::new("s3cret").is_err());
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self, PuzzleError> {
        let word: String = word.into().to_lowercase();

        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(PuzzleError::InvalidCharacters);
        }

        let pending: FxHashSet<char> = word.chars().collect();

        Ok(Self { word, pending })
    }

    /// Rebuild a Puzzle from a saved word and pending set
    ///
    /// The pending set is taken verbatim from the caller; it is NOT
    /// recomputed or checked against the word's letters. A hand-edited save
    /// can therefore produce a puzzle that is unwinnable or already won.
    pub fn restore(word: impl Into<String>, pending: impl IntoIterator<Item = char>) -> Self {
        Self {
            word: word.into(),
            pending: pending.into_iter().collect(),
        }
    }

    /// Get the secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the pending letters in sorted order
    ///
    /// Sorted so save files come out deterministic.
    #[must_use]
    pub fn pending_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.pending.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Apply a guess
    ///
    /// A hit removes the letter from the pending set and returns true. A
    /// miss leaves the puzzle untouched and returns false. Guessing a letter
    /// that was already revealed is a miss.
    pub fn guess(&mut self, ch: char) -> bool {
        self.pending.remove(&ch)
    }

    /// Check whether every letter has been revealed
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pending.is_empty()
    }

    /// Render the word with unguessed letters masked
    ///
    /// Yields one display char per position of the word, in word order:
    /// the true character when it has been guessed, [`PLACEHOLDER`]
    /// otherwise. Built fresh on every call.
    #[must_use]
    pub fn render(&self) -> Vec<char> {
        self.word
            .chars()
            .map(|c| if self.pending.contains(&c) { PLACEHOLDER } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_creation_valid() {
        let puzzle = Puzzle::new("mango").unwrap();
        assert_eq!(puzzle.word(), "mango");
        assert_eq!(puzzle.pending_letters(), vec!['a', 'g', 'm', 'n', 'o']);
    }

    #[test]
    fn puzzle_creation_uppercase_normalized() {
        let puzzle = Puzzle::new("MANGO").unwrap();
        assert_eq!(puzzle.word(), "mango");
    }

    #[test]
    fn puzzle_creation_deduplicates_letters() {
        let puzzle = Puzzle::new("banana").unwrap();
        assert_eq!(puzzle.pending_letters(), vec!['a', 'b', 'n']);
    }

    #[test]
    fn puzzle_creation_invalid() {
        assert!(matches!(Puzzle::new(""), Err(PuzzleError::EmptyWord)));
        assert!(matches!(
            Puzzle::new("s3cret"),
            Err(PuzzleError::InvalidCharacters)
        ));
        assert!(matches!(
            Puzzle::new("two words"),
            Err(PuzzleError::InvalidCharacters)
        ));
    }

    #[test]
    fn render_masks_all_letters_initially() {
        let puzzle = Puzzle::new("mango").unwrap();
        assert_eq!(puzzle.render(), vec!['_', '_', '_', '_', '_']);
    }

    #[test]
    fn render_length_matches_word() {
        for word in ["house", "cauliflower", "abracadabra"] {
            let puzzle = Puzzle::new(word).unwrap();
            assert_eq!(puzzle.render().len(), word.len());
        }
    }

    #[test]
    fn render_reveals_hits_in_position_order() {
        let mut puzzle = Puzzle::new("banana").unwrap();
        assert!(puzzle.guess('a'));
        assert_eq!(puzzle.render(), vec!['_', 'a', '_', 'a', '_', 'a']);
        assert!(puzzle.guess('n'));
        assert_eq!(puzzle.render(), vec!['_', 'a', 'n', 'a', 'n', 'a']);
    }

    #[test]
    fn guess_miss_leaves_state_untouched() {
        let mut puzzle = Puzzle::new("mango").unwrap();
        assert!(!puzzle.guess('z'));
        assert_eq!(puzzle.pending_letters(), vec!['a', 'g', 'm', 'n', 'o']);
        assert_eq!(puzzle.render(), vec!['_', '_', '_', '_', '_']);
    }

    #[test]
    fn repeated_guess_is_a_miss_after_removal() {
        let mut puzzle = Puzzle::new("mango").unwrap();
        assert!(puzzle.guess('m'));
        // Already revealed, so the second guess reports a miss
        assert!(!puzzle.guess('m'));
        assert_eq!(puzzle.render()[0], 'm');
    }

    #[test]
    fn guessing_all_distinct_letters_wins() {
        let mut puzzle = Puzzle::new("mango").unwrap();
        for ch in ['m', 'a', 'n', 'g', 'o'] {
            assert!(!puzzle.is_won());
            assert!(puzzle.guess(ch));
        }
        assert!(puzzle.is_won());
        assert_eq!(puzzle.render(), vec!['m', 'a', 'n', 'g', 'o']);
    }

    #[test]
    fn restore_trusts_pending_verbatim() {
        // 'z' is not in the word; restore keeps it anyway
        let puzzle = Puzzle::restore("mango", ['z']);
        assert_eq!(puzzle.pending_letters(), vec!['z']);
        assert!(!puzzle.is_won());
        // Every real letter already counts as revealed
        assert_eq!(puzzle.render(), vec!['m', 'a', 'n', 'g', 'o']);
    }

    #[test]
    fn restore_with_empty_pending_is_won() {
        let puzzle = Puzzle::restore("mango", []);
        assert!(puzzle.is_won());
    }

    #[test]
    fn restore_preserves_mid_game_progress() {
        let puzzle = Puzzle::restore("mango", ['g', 'o']);
        assert_eq!(puzzle.render(), vec!['m', 'a', 'n', '_', '_']);
    }
}
