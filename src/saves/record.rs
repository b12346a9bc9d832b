//! Persisted snapshot of a mid-game session
//!
//! The JSON schema mirrors what the game has always written: `word` and
//! `letters` (the pending set) are required, `guesses` and `num_guesses`
//! default when absent.

use serde::{Deserialize, Serialize};

use crate::core::{GuessLog, Puzzle};

/// One saved game, as written to and read from a save file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// The secret word
    pub word: String,
    /// Letters not yet guessed correctly
    pub letters: Vec<char>,
    /// Incorrect guesses in chronological order
    #[serde(default)]
    pub guesses: Vec<char>,
    /// Running miss count, stored alongside the list
    #[serde(default)]
    pub num_guesses: usize,
}

impl SaveRecord {
    /// Snapshot the current puzzle and guess log
    #[must_use]
    pub fn capture(puzzle: &Puzzle, log: &GuessLog) -> Self {
        Self {
            word: puzzle.word().to_string(),
            letters: puzzle.pending_letters(),
            guesses: log.misses().to_vec(),
            num_guesses: log.count(),
        }
    }

    /// Rebuild the puzzle and guess log this record describes
    ///
    /// All fields are trusted verbatim; see `Puzzle::restore` and
    /// `GuessLog::restore`.
    #[must_use]
    pub fn into_game(self) -> (Puzzle, GuessLog) {
        let puzzle = Puzzle::restore(self.word, self.letters);
        let log = GuessLog::restore(self.guesses, self.num_guesses);
        (puzzle, log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_snapshots_mid_game_state() {
        let mut puzzle = Puzzle::new("mango").unwrap();
        let mut log = GuessLog::new();
        puzzle.guess('m');
        log.record('x');
        log.record('z');

        let record = SaveRecord::capture(&puzzle, &log);
        assert_eq!(record.word, "mango");
        assert_eq!(record.letters, vec!['a', 'g', 'n', 'o']);
        assert_eq!(record.guesses, vec!['x', 'z']);
        assert_eq!(record.num_guesses, 2);
    }

    #[test]
    fn capture_then_into_game_round_trips() {
        let mut puzzle = Puzzle::new("banana").unwrap();
        let mut log = GuessLog::new();
        puzzle.guess('b');
        puzzle.guess('a');
        log.record('q');

        let record = SaveRecord::capture(&puzzle, &log);
        let (restored_puzzle, restored_log) = record.into_game();

        assert_eq!(restored_puzzle, puzzle);
        assert_eq!(restored_log, log);
    }

    #[test]
    fn json_round_trip() {
        let record = SaveRecord {
            word: "mango".to_string(),
            letters: vec!['g', 'o'],
            guesses: vec!['x'],
            num_guesses: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: SaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn missing_guess_fields_default_to_empty() {
        let json = r#"{"word":"mango","letters":["m","a","n","g","o"]}"#;
        let record: SaveRecord = serde_json::from_str(json).unwrap();
        assert!(record.guesses.is_empty());
        assert_eq!(record.num_guesses, 0);

        let (_, log) = record.into_game();
        assert!(log.is_empty());
    }

    #[test]
    fn missing_word_is_rejected() {
        let json = r#"{"letters":["m"]}"#;
        assert!(serde_json::from_str::<SaveRecord>(json).is_err());
    }
}
