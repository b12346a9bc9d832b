//! Hangman - CLI
//!
//! Terminal hangman with save/resume: guess the hidden word one letter at a
//! time, six misses and you're out.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hangman::saves::SaveStore;
use hangman::session::Session;
use hangman::wordbank::WordBank;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with save/resume support",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line (5-12 letter words are used)
    #[arg(short, long, default_value = "5desk.txt")]
    wordlist: PathBuf,

    /// Directory for save files
    #[arg(short, long, default_value = "saves")]
    saves: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = WordBank::load(&cli.wordlist)
        .with_context(|| format!("loading word list '{}'", cli.wordlist.display()))?;
    log::debug!("word bank ready: {} words", bank.len());

    let store = SaveStore::new(cli.saves);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(&bank, store, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
