//! The 6x5 guess board

use crate::core::{Cell, Row, WORD_LEN};

/// Number of guess rows on the board
pub const ROWS: usize = 6;

/// Fixed-size grid of cells: six rows of five letters
///
/// Dimensions never change after creation. A cell's character is only ever
/// set through typing and reverted through explicit deletion; both go through
/// the state machine in [`super::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board of entirely empty cells
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: [[Cell::EMPTY; WORD_LEN]; ROWS],
        }
    }

    /// All rows, top to bottom
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// A single row
    ///
    /// # Panics
    /// Panics if `row >= ROWS`
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// A single cell
    ///
    /// # Panics
    /// Panics if the position is out of bounds
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Iterator over every cell on the board, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// The letters typed into a row so far, as an uppercase string
    ///
    /// Empty cells contribute nothing, so a half-typed row yields a short
    /// string.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows[row].iter().filter_map(|c| c.ch()).collect()
    }

    pub(crate) const fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.rows[row][col] = cell;
    }

    pub(crate) const fn set_row(&mut self, row: usize, cells: Row) {
        self.rows[row] = cells;
    }
}
