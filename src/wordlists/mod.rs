//! Dictionary of valid guesses
//!
//! The game core consumes exactly one operation from the dictionary:
//! membership. `WordList` wraps an uppercase hash set built either from the
//! embedded list compiled into the binary or from a custom file.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

/// A static, unordered set of uppercase words of the target length
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    /// Build a dictionary from any iterator of words
    ///
    /// Entries are normalized to uppercase; membership is case insensitive.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Load a dictionary from a file, one word per line
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", words.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }

    /// Whether `word` is a valid guess (case insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
