//! Word Guess - CLI
//!
//! Wordle-style word-guessing game with TUI and plain CLI modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::Game,
    interactive::{App, run_tui},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Single-screen word-guessing puzzle: six tries at a five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word to guess (fixed for the whole session)
    #[arg(short, long, global = true, default_value = "palms")]
    target: String,

    /// Path to a custom word list file (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-oriented CLI mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = match &cli.wordlist {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(),
    };

    let target = Word::new(&cli.target)?;
    if !words.contains(target.text()) {
        bail!(
            "target word '{}' is not in the word list; it could never be guessed",
            target.text()
        );
    }

    let game = Game::new(target, words);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => {
            let mut game = game;
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
