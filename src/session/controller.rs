//! Session turn loop
//!
//! Drives one puzzle at a time over caller-supplied input/output streams:
//! offer a resume from the save directory, loop over guesses, announce the
//! outcome, offer a replay. Replays always start a brand-new word.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::core::{GuessLog, Puzzle};
use crate::output::display;
use crate::saves::SaveStore;
use crate::session::input::{self, LoadChoice, TurnInput};
use crate::wordbank::WordBank;

/// Maximum number of misses before a round is lost
pub const MAX_INCORRECT: usize = 6;

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Final round was won and the player declined a replay
    Won,
    /// Final round was lost and the player declined a replay
    Lost,
    /// The game was saved to this path and the session exited early
    Saved(PathBuf),
}

/// How a single round ended (before the replay prompt)
enum RoundEnd {
    Won,
    Lost,
    Saved(PathBuf),
}

/// One interactive game session
///
/// Generic over its streams so tests can script input and capture output.
pub struct Session<'a, R, W> {
    bank: &'a WordBank,
    store: SaveStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(bank: &'a WordBank, store: SaveStore, input: R, output: W) -> Self {
        Self {
            bank,
            store,
            input,
            output,
        }
    }

    /// Run the session to completion
    ///
    /// # Errors
    /// Fails on I/O errors against the streams or the save directory, or if
    /// the input stream closes while a prompt is waiting. Invalid input and
    /// unloadable save files are handled internally and never propagate.
    pub fn run(mut self) -> Result<Outcome> {
        let (mut puzzle, mut log) = self.select_source()?;

        loop {
            match self.play_round(&mut puzzle, &mut log)? {
                RoundEnd::Saved(path) => return Ok(Outcome::Saved(path)),
                end @ (RoundEnd::Won | RoundEnd::Lost) => {
                    if !self.prompt_replay()? {
                        return Ok(match end {
                            RoundEnd::Won => Outcome::Won,
                            _ => Outcome::Lost,
                        });
                    }
                    // No load prompt on replay: always a fresh word
                    (puzzle, log) = self.fresh_game()?;
                }
            }
        }
    }

    /// Pick a starting state: resume a listed save or start fresh
    ///
    /// Shown only when saves exist. An unloadable save prints a message and
    /// falls back to a fresh game; invalid menu input re-prompts.
    fn select_source(&mut self) -> Result<(Puzzle, GuessLog)> {
        let saves = self.store.list().context("listing save files")?;
        if saves.is_empty() {
            return self.fresh_game();
        }

        display::print_save_menu(&mut self.output, &saves)?;

        loop {
            let entry = self.prompt("Select a file to load (or 'x' to skip)")?;
            match input::parse_load_choice(&entry, saves.len()) {
                Some(LoadChoice::Skip) => return self.fresh_game(),
                Some(LoadChoice::Index(index)) => {
                    let path = &saves[index];
                    writeln!(self.output, "Loading '{}'", path.display())?;
                    match self.store.load(path) {
                        Ok(record) => return Ok(record.into_game()),
                        Err(err) => {
                            log::warn!("discarding save {}: {err}", path.display());
                            writeln!(self.output, "Error opening save file")?;
                            return self.fresh_game();
                        }
                    }
                }
                None => self.reject(&entry)?,
            }
        }
    }

    fn fresh_game(&self) -> Result<(Puzzle, GuessLog)> {
        let puzzle = Puzzle::new(self.bank.pick())?;
        Ok((puzzle, GuessLog::new()))
    }

    /// Play one round until won, lost, or saved
    fn play_round(&mut self, puzzle: &mut Puzzle, log: &mut GuessLog) -> Result<RoundEnd> {
        while !puzzle.is_won() && log.count() < MAX_INCORRECT {
            display::print_state(&mut self.output, puzzle, log)?;

            match self.prompt_turn()? {
                TurnInput::Save => {
                    let path = self.store.save(puzzle, log).context("writing save file")?;
                    writeln!(self.output, "File saved to '{}'", path.display())?;
                    return Ok(RoundEnd::Saved(path));
                }
                TurnInput::Letter(ch) => {
                    if !puzzle.guess(ch) {
                        log.record(ch);
                    }
                }
            }
        }

        display::print_state(&mut self.output, puzzle, log)?;

        // Won is checked first: revealing the last letter while sitting at
        // the final allowed miss still wins
        if puzzle.is_won() {
            display::print_outcome(&mut self.output, true)?;
            Ok(RoundEnd::Won)
        } else {
            display::print_outcome(&mut self.output, false)?;
            Ok(RoundEnd::Lost)
        }
    }

    fn prompt_turn(&mut self) -> Result<TurnInput> {
        loop {
            let entry = self.prompt("Enter a letter (or '5' to save and exit game)")?;
            match input::parse_turn(&entry) {
                Some(turn) => return Ok(turn),
                None => self.reject(&entry)?,
            }
        }
    }

    fn prompt_replay(&mut self) -> Result<bool> {
        loop {
            let entry = self.prompt("Play again? (y/n)")?;
            match input::parse_replay(&entry) {
                Some(answer) => return Ok(answer),
                None => self.reject(&entry)?,
            }
        }
    }

    /// Show a prompt and read one trimmed line
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading user input")?;
        if read == 0 {
            bail!("input stream closed while waiting for input");
        }
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, entry: &str) -> Result<()> {
        writeln!(self.output, "'{entry}' is an invalid entry")?;
        Ok(())
    }
}
