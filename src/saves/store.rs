//! Save directory management
//!
//! One JSON file per save action, named by local timestamp at second
//! resolution so that lexical order of the listing matches chronological
//! order. Two saves in the same second overwrite each other.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::{GuessLog, Puzzle};
use crate::saves::SaveRecord;

const SAVE_EXTENSION: &str = "json";

/// Reads and writes save records under one directory
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

/// Error type for a failed load
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// The content is not valid JSON
    Malformed(serde_json::Error),
    /// Valid JSON, but the required `word`/`letters` fields are absent
    Corrupt,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read save file: {err}"),
            Self::Malformed(err) => write!(f, "save file is not valid JSON: {err}"),
            Self::Corrupt => write!(f, "save file is missing required fields (word, letters)"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::Corrupt => None,
        }
    }
}

impl SaveStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory itself is only created on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads and writes
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist the current game, returning the path written
    ///
    /// Creates the save directory if absent. The filename is the current
    /// local time formatted `YYYY-MM-DD-HHMMSS`.
    pub fn save(&self, puzzle: &Puzzle, log: &GuessLog) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let stamp = Local::now().format("%Y-%m-%d-%H%M%S");
        let path = self.dir.join(format!("{stamp}.{SAVE_EXTENSION}"));

        let record = SaveRecord::capture(puzzle, log);
        let json = serde_json::to_string(&record).map_err(io::Error::other)?;
        fs::write(&path, json)?;

        log::info!("saved game to {}", path.display());
        Ok(path)
    }

    /// List save files in ascending lexical (= chronological) order
    ///
    /// A missing save directory is an empty list, not an error.
    pub fn list(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == SAVE_EXTENSION)
            })
            .collect();

        paths.sort();
        Ok(paths)
    }

    /// Read and parse one save record
    ///
    /// Distinguishes unreadable files, non-JSON content, and JSON missing
    /// the required `word`/`letters` keys. Callers recover from any of
    /// these by starting a fresh game.
    pub fn load(&self, path: &Path) -> Result<SaveRecord, LoadError> {
        let content = fs::read_to_string(path).map_err(LoadError::Io)?;

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(LoadError::Malformed)?;

        if value.get("word").is_none() || value.get("letters").is_none() {
            return Err(LoadError::Corrupt);
        }

        serde_json::from_value(value).map_err(LoadError::Malformed)
    }
}
