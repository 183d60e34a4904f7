//! Shared on-screen keyboard
//!
//! One key per letter of the alphabet, each holding the best verdict observed
//! for that letter anywhere on the board. The keyboard is a derived view: it
//! is recomputed wholesale from the board after every mutation rather than
//! patched incrementally. At 6x5 cells against 26 keys the full scan is
//! trivially cheap.

use super::Board;
use crate::core::{Cell, Verdict};

/// Keys in on-screen order: three QWERTY rows of 10, 9 and 7 letters
pub const KEY_LAYOUT: [char; 26] = [
    'Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', //
    'A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', //
    'Z', 'X', 'C', 'V', 'B', 'N', 'M',
];

/// The 26-key aggregate feedback keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: [Cell; 26],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Keyboard {
    /// A keyboard with every key at `Verdict::Empty`
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keys: KEY_LAYOUT.map(|c| Cell::filled(c).with_verdict(Verdict::Empty)),
        }
    }

    /// Derive the keyboard from the current board
    ///
    /// For each letter, keeps the maximum verdict (per the `Verdict`
    /// ordering) among all board cells holding that letter. Letters that
    /// appear nowhere on the board stay `Empty`.
    #[must_use]
    pub fn scrape(board: &Board) -> Self {
        let mut keyboard = Self::empty();
        for key in &mut keyboard.keys {
            let best = board
                .cells()
                .filter(|cell| cell.ch() == key.ch())
                .map(Cell::verdict)
                .max()
                .unwrap_or(Verdict::Empty);
            *key = key.with_verdict(best);
        }
        keyboard
    }

    /// All 26 keys in layout order
    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &[Cell; 26] {
        &self.keys
    }

    /// The three visual keyboard rows (10, 9 and 7 keys)
    #[must_use]
    pub fn rows(&self) -> [&[Cell]; 3] {
        [&self.keys[..10], &self.keys[10..19], &self.keys[19..]]
    }

    /// The aggregate verdict for a letter (case insensitive)
    #[must_use]
    pub fn verdict_for(&self, letter: char) -> Verdict {
        let letter = letter.to_ascii_uppercase();
        self.keys
            .iter()
            .find(|key| key.ch() == Some(letter))
            .map_or(Verdict::Empty, |key| key.verdict())
    }
}
