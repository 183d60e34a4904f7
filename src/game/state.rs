//! Turn-based game state machine
//!
//! Owns the board, cursor and phase, and applies the three input events the
//! presentation shells can send: type a character, delete a character, submit
//! the active row. Invalid input is never an error; it is a silent no-op, and
//! the shells interpret the absence of a state change.

use super::{Board, Keyboard, ROWS};
use crate::core::{Cell, Verdict, WORD_LEN, Word, evaluate};
use crate::wordlists::WordList;

/// Overall game lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No input received yet
    #[default]
    NotStarted,
    /// At least one keypress accepted, puzzle not solved
    InProgress,
    /// A submitted row came back all-Correct. Terminal: all further input
    /// is ignored.
    Complete,
}

/// One in-memory game session
///
/// Exactly one of [`push_char`](Self::push_char),
/// [`delete_char`](Self::delete_char) and [`submit_row`](Self::submit_row)
/// runs at a time, driven by UI events; the rest of the state is read-only
/// to the outside.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    keyboard: Keyboard,
    active_row: usize,
    active_col: usize,
    phase: Phase,
    target: Word,
    words: WordList,
}

impl Game {
    /// Start a fresh game against `target`, validating guesses with `words`
    #[must_use]
    pub fn new(target: Word, words: WordList) -> Self {
        Self {
            board: Board::empty(),
            keyboard: Keyboard::empty(),
            active_row: 0,
            active_col: 0,
            phase: Phase::NotStarted,
            target,
            words,
        }
    }

    /// Type a character into the cell under the cursor
    ///
    /// The first keypress moves the game from `NotStarted` to `InProgress`.
    /// When the active row is already full the character is dropped silently.
    pub fn push_char(&mut self, ch: char) {
        if self.phase == Phase::Complete {
            return;
        }
        if self.phase == Phase::NotStarted {
            self.phase = Phase::InProgress;
        }
        if self.active_col < WORD_LEN {
            self.board
                .set_cell(self.active_row, self.active_col, Cell::filled(ch));
            self.active_col += 1;
            self.keyboard = Keyboard::scrape(&self.board);
        }
    }

    /// Delete the character left of the cursor
    ///
    /// No-op at the start of a row or once the game is complete.
    pub fn delete_char(&mut self) {
        if self.phase == Phase::Complete {
            return;
        }
        if self.active_col > 0 {
            self.active_col -= 1;
            self.board
                .set_cell(self.active_row, self.active_col, Cell::EMPTY);
            self.keyboard = Keyboard::scrape(&self.board);
        }
    }

    /// Submit the active row as a guess
    ///
    /// Two-phase: the row is evaluated and the verdicts written back to the
    /// board *before* any acceptance check, so a short or unknown row still
    /// shows its evaluation. This write-then-gate ordering is deliberate and
    /// load-bearing; see DESIGN.md. Advancement is then gated: the row must
    /// be full and the word must be in the dictionary. An all-Correct row
    /// completes the game; otherwise the cursor moves to the next row, except
    /// on the last row where the machine simply stays `InProgress`.
    pub fn submit_row(&mut self) {
        if self.phase == Phase::Complete {
            return;
        }

        let evaluated = evaluate(&self.target, *self.board.row(self.active_row));
        self.board.set_row(self.active_row, evaluated);
        self.keyboard = Keyboard::scrape(&self.board);

        if self.active_col < WORD_LEN {
            return;
        }
        if !self.words.contains(&self.board.row_text(self.active_row)) {
            return;
        }

        if evaluated.iter().all(|c| c.verdict() == Verdict::Correct) {
            self.phase = Phase::Complete;
            return;
        }

        if self.active_row + 1 < ROWS {
            self.active_row += 1;
            self.active_col = 0;
        }
    }

    /// Throw away all progress and start over against the same target
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.keyboard = Keyboard::empty();
        self.active_row = 0;
        self.active_col = 0;
        self.phase = Phase::NotStarted;
    }

    /// The board, for rendering
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The aggregate feedback keyboard, for rendering
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Cursor as `(active_row, active_col)`
    ///
    /// `active_col` may equal the row length when the row is full.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.active_row, self.active_col)
    }

    /// The word the player is trying to discover
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The dictionary used to validate guesses
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// The "puzzle solved" signal consumed by the presentation shells
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Whether the final guess has been spent without solving the puzzle
    ///
    /// The machine has no `Lost` phase; it stays `InProgress` after an
    /// accepted-but-wrong last-row guess. This derived view lets a shell
    /// surface the condition: the cursor is parked on a full last row whose
    /// dictionary word has been evaluated and did not win.
    #[must_use]
    pub fn out_of_guesses(&self) -> bool {
        self.phase == Phase::InProgress
            && self.active_row == ROWS - 1
            && self.active_col == WORD_LEN
            && self
                .board
                .row(self.active_row)
                .iter()
                .all(|c| c.verdict() > Verdict::Filled)
            && self.words.contains(&self.board.row_text(self.active_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        let words = WordList::from_words(["palms", "slate", "crane", "plant", "speed", "stare"]);
        Game::new(Word::new("palms").unwrap(), words)
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.push_char(ch);
        }
    }

    #[test]
    fn first_keypress_starts_the_game() {
        let mut g = game();
        assert_eq!(g.phase(), Phase::NotStarted);

        g.push_char('s');
        assert_eq!(g.phase(), Phase::InProgress);
        assert_eq!(g.cursor(), (0, 1));
        assert_eq!(g.board().cell(0, 0).ch(), Some('S'));
        assert_eq!(g.board().cell(0, 0).verdict(), Verdict::Filled);
    }

    #[test]
    fn sixth_character_in_a_row_is_dropped() {
        let mut g = game();
        type_word(&mut g, "slate");
        assert_eq!(g.cursor(), (0, 5));

        g.push_char('x');
        assert_eq!(g.cursor(), (0, 5));
        assert_eq!(g.board().row_text(0), "SLATE");
    }

    #[test]
    fn delete_at_column_zero_is_a_no_op() {
        let mut g = game();
        let before = g.board().clone();

        g.delete_char();
        assert_eq!(g.cursor(), (0, 0));
        assert_eq!(g.board(), &before);
    }

    #[test]
    fn delete_reverts_the_previous_cell() {
        let mut g = game();
        type_word(&mut g, "sla");
        g.delete_char();

        assert_eq!(g.cursor(), (0, 2));
        assert!(g.board().cell(0, 2).is_empty());
        assert_eq!(g.board().row_text(0), "SL");
    }

    #[test]
    fn typed_letters_show_as_filled_on_the_keyboard() {
        let mut g = game();
        type_word(&mut g, "sl");
        assert_eq!(g.keyboard().verdict_for('S'), Verdict::Filled);
        assert_eq!(g.keyboard().verdict_for('L'), Verdict::Filled);
        assert_eq!(g.keyboard().verdict_for('Q'), Verdict::Empty);
    }

    #[test]
    fn incomplete_row_is_evaluated_but_not_advanced() {
        // Verdicts are written before the fullness check; a short row keeps
        // its evaluation even though submission is rejected.
        let mut g = game();
        type_word(&mut g, "pal");
        g.submit_row();

        assert_eq!(g.cursor(), (0, 3));
        assert_eq!(g.phase(), Phase::InProgress);
        assert_eq!(g.board().cell(0, 0).verdict(), Verdict::Correct);
        assert_eq!(g.board().cell(0, 1).verdict(), Verdict::Correct);
        assert_eq!(g.board().cell(0, 2).verdict(), Verdict::Correct);
        assert_eq!(g.board().cell(0, 3).verdict(), Verdict::Incorrect);
    }

    #[test]
    fn unknown_word_is_rejected_but_keeps_its_evaluation() {
        let mut g = game();
        type_word(&mut g, "xxxxx");
        g.submit_row();

        // Row does not advance, column is not reset
        assert_eq!(g.cursor(), (0, 5));
        assert_eq!(g.phase(), Phase::InProgress);
        assert!(
            g.board()
                .row(0)
                .iter()
                .all(|c| c.verdict() == Verdict::Incorrect)
        );
    }

    #[test]
    fn rejected_word_can_be_deleted_and_retyped() {
        let mut g = game();
        type_word(&mut g, "xxxxx");
        g.submit_row();
        for _ in 0..5 {
            g.delete_char();
        }
        type_word(&mut g, "palms");
        g.submit_row();

        assert!(g.is_solved());
    }

    #[test]
    fn accepted_wrong_guess_advances_to_next_row() {
        let mut g = game();
        type_word(&mut g, "slate");
        g.submit_row();

        assert_eq!(g.cursor(), (1, 0));
        assert_eq!(g.phase(), Phase::InProgress);
        // S present elsewhere, L present elsewhere, A present elsewhere,
        // T absent, E absent
        let verdicts: Vec<Verdict> = g.board().row(0).iter().map(|c| c.verdict()).collect();
        assert_eq!(
            verdicts,
            vec![
                Verdict::Partial,
                Verdict::Partial,
                Verdict::Partial,
                Verdict::Incorrect,
                Verdict::Incorrect,
            ]
        );
    }

    #[test]
    fn keyboard_aggregates_across_submitted_rows() {
        let mut g = game();
        type_word(&mut g, "slate");
        g.submit_row();
        type_word(&mut g, "plant");
        g.submit_row();

        // Best verdict per letter across both rows: P was Correct in
        // PLANT, A was Partial in both, T was Incorrect in both.
        assert_eq!(g.keyboard().verdict_for('P'), Verdict::Correct);
        assert_eq!(g.keyboard().verdict_for('A'), Verdict::Partial);
        assert_eq!(g.keyboard().verdict_for('T'), Verdict::Incorrect);
        assert_eq!(g.keyboard().verdict_for('Q'), Verdict::Empty);
    }

    #[test]
    fn winning_guess_completes_the_game() {
        let mut g = game();
        type_word(&mut g, "palms");
        g.submit_row();

        assert!(g.is_solved());
        assert_eq!(g.phase(), Phase::Complete);
        assert!(
            g.board()
                .row(0)
                .iter()
                .all(|c| c.verdict() == Verdict::Correct)
        );
        // Cursor does not advance past the winning row
        assert_eq!(g.cursor(), (0, 5));
    }

    #[test]
    fn complete_is_terminal() {
        let mut g = game();
        type_word(&mut g, "palms");
        g.submit_row();
        assert!(g.is_solved());

        let board = g.board().clone();
        g.push_char('z');
        g.delete_char();
        g.submit_row();

        assert_eq!(g.board(), &board);
        assert_eq!(g.phase(), Phase::Complete);
        assert_eq!(g.cursor(), (0, 5));
    }

    #[test]
    fn last_row_failure_stays_in_progress() {
        let mut g = game();
        for _ in 0..ROWS {
            type_word(&mut g, "slate");
            g.submit_row();
        }

        assert_eq!(g.phase(), Phase::InProgress);
        assert_eq!(g.cursor(), (ROWS - 1, WORD_LEN));
        assert!(g.out_of_guesses());

        // Still a silent no-op to keep submitting
        g.submit_row();
        assert_eq!(g.cursor(), (ROWS - 1, WORD_LEN));
    }

    #[test]
    fn full_unsubmitted_last_row_is_not_out_of_guesses() {
        let mut g = game();
        for _ in 0..ROWS - 1 {
            type_word(&mut g, "slate");
            g.submit_row();
        }
        type_word(&mut g, "crane");

        assert!(!g.out_of_guesses());
        g.submit_row();
        assert!(g.out_of_guesses());
    }

    #[test]
    fn rejected_last_row_word_is_not_out_of_guesses() {
        let mut g = game();
        for _ in 0..ROWS - 1 {
            type_word(&mut g, "slate");
            g.submit_row();
        }
        type_word(&mut g, "xxxxx");
        g.submit_row();

        // The player can still delete and retype
        assert!(!g.out_of_guesses());
    }

    #[test]
    fn reset_returns_to_a_fresh_game() {
        let mut g = game();
        type_word(&mut g, "slate");
        g.submit_row();
        g.reset();

        assert_eq!(g.phase(), Phase::NotStarted);
        assert_eq!(g.cursor(), (0, 0));
        assert_eq!(g.board(), &Board::empty());
        assert_eq!(g.keyboard(), &Keyboard::empty());
        assert_eq!(g.target().text(), "PALMS");
    }

    #[test]
    fn lowercase_input_is_normalized() {
        let mut g = game();
        type_word(&mut g, "palms");
        g.submit_row();
        assert!(g.is_solved());
    }
}
