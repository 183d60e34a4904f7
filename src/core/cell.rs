//! Board cells and per-letter verdicts
//!
//! A `Cell` is one square of the board (or one key of the shared keyboard):
//! an optional uppercase letter plus the feedback verdict attached to it.

/// Per-letter feedback classification
///
/// The declaration order is part of the contract: keyboard aggregation keeps
/// the *maximum* verdict observed for a letter, so
/// `Empty < Filled < Incorrect < Partial < Correct` must hold under `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verdict {
    /// No letter has been placed here yet
    #[default]
    Empty,
    /// A letter has been typed but the row has not been evaluated
    Filled,
    /// The letter does not occur in the target word
    Incorrect,
    /// The letter occurs in the target word at a different position
    Partial,
    /// The letter matches the target word at this exact position
    Correct,
}

/// One square of the board: an optional uppercase letter and its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    ch: Option<char>,
    verdict: Verdict,
}

impl Cell {
    /// An empty cell (no letter, `Verdict::Empty`)
    pub const EMPTY: Self = Self {
        ch: None,
        verdict: Verdict::Empty,
    };

    /// Create a freshly typed cell holding `ch` with `Verdict::Filled`
    ///
    /// The character is normalized to uppercase.
    #[must_use]
    pub fn filled(ch: char) -> Self {
        Self {
            ch: Some(ch.to_ascii_uppercase()),
            verdict: Verdict::Filled,
        }
    }

    /// The letter in this cell, if any
    #[inline]
    #[must_use]
    pub const fn ch(self) -> Option<char> {
        self.ch
    }

    /// The verdict attached to this cell
    #[inline]
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        self.verdict
    }

    /// Whether the cell holds no letter
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.ch.is_none()
    }

    /// Copy of this cell with its verdict replaced
    #[inline]
    #[must_use]
    pub const fn with_verdict(self, verdict: Verdict) -> Self {
        Self {
            ch: self.ch,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ordering_is_the_aggregation_ranking() {
        assert!(Verdict::Empty < Verdict::Filled);
        assert!(Verdict::Filled < Verdict::Incorrect);
        assert!(Verdict::Incorrect < Verdict::Partial);
        assert!(Verdict::Partial < Verdict::Correct);
    }

    #[test]
    fn verdict_max_picks_strongest_evidence() {
        let verdicts = [Verdict::Incorrect, Verdict::Correct, Verdict::Partial];
        assert_eq!(verdicts.iter().max(), Some(&Verdict::Correct));
    }

    #[test]
    fn empty_cell() {
        let cell = Cell::EMPTY;
        assert!(cell.is_empty());
        assert_eq!(cell.ch(), None);
        assert_eq!(cell.verdict(), Verdict::Empty);
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn filled_cell_normalizes_to_uppercase() {
        let cell = Cell::filled('p');
        assert_eq!(cell.ch(), Some('P'));
        assert_eq!(cell.verdict(), Verdict::Filled);
        assert!(!cell.is_empty());
    }

    #[test]
    fn with_verdict_keeps_letter() {
        let cell = Cell::filled('A').with_verdict(Verdict::Correct);
        assert_eq!(cell.ch(), Some('A'));
        assert_eq!(cell.verdict(), Verdict::Correct);
    }
}
