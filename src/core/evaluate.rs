//! Guess evaluation
//!
//! The one piece of real logic in the game: mapping a submitted row and the
//! target word to per-letter verdicts. Pure function, no knowledge of the
//! cursor or the game phase.

use super::{Row, Verdict, Word};

/// Evaluate a submitted row against the target word
///
/// Every cell defaults to `Incorrect`, is upgraded to `Partial` when its
/// letter occurs anywhere in the target, and finally to `Correct` when it
/// matches the target letter at that exact index. Exact-position match is
/// strictly stronger evidence than mere presence, so the `Correct` upgrade
/// runs last and overrides `Partial`.
///
/// Cells that hold no letter can never match and come out `Incorrect`.
///
/// Note: there is no duplicate-letter accounting. A guess that repeats a
/// letter of the target gets a `Partial` mark for every occurrence, even
/// when the target holds fewer copies. This over-crediting matches the
/// shipped behavior and is pinned by tests; see DESIGN.md before changing it.
///
/// # Examples
/// ```
/// use wordle_game::core::{Cell, Verdict, Word, evaluate};
///
/// let target = Word::new("palms").unwrap();
/// let row = ['P', 'L', 'A', 'M', 'S'].map(Cell::filled);
/// let verdicts = evaluate(&target, row).map(Cell::verdict);
/// assert_eq!(
///     verdicts,
///     [
///         Verdict::Correct,
///         Verdict::Partial,
///         Verdict::Partial,
///         Verdict::Correct,
///         Verdict::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(target: &Word, row: Row) -> Row {
    let mut result = row;

    for (i, cell) in result.iter_mut().enumerate() {
        *cell = cell.with_verdict(Verdict::Incorrect);

        if let Some(ch) = cell.ch() {
            if target.contains(ch) {
                *cell = cell.with_verdict(Verdict::Partial);
            }
            if target.char_at(i) == ch {
                *cell = cell.with_verdict(Verdict::Correct);
            }
        }
    }

    result
}
