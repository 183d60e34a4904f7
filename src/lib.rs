//! Word Guess
//!
//! A single-screen Wordle-style word-guessing game: six attempts at a fixed
//! five-letter target word, per-letter feedback after every guess, and a
//! shared keyboard showing the best feedback seen per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::Game;
//! use wordle_game::wordlists::WordList;
//!
//! let mut game = Game::new(Word::new("palms").unwrap(), WordList::embedded());
//! for ch in "plams".chars() {
//!     game.push_char(ch);
//! }
//! game.submit_row();
//! assert!(!game.is_solved()); // close, but not quite
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
