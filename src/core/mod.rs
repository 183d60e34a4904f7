//! Core domain types for the word-guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have no rendering concerns.

mod cell;
mod evaluate;
mod word;

pub use cell::{Cell, Verdict};
pub use evaluate::evaluate;
pub use word::{WORD_LEN, Word, WordError};

/// One full-length attempt at the target word
pub type Row = [Cell; WORD_LEN];
