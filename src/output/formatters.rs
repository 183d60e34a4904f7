//! Formatting utilities for terminal output

use crate::core::{Cell, Verdict};
use crate::game::{Board, Keyboard};
use colored::{ColoredString, Colorize};

/// Paint one cell as a three-character colored tile
fn tile(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.ch().unwrap_or('·'));
    match cell.verdict() {
        Verdict::Correct => text.black().on_green(),
        Verdict::Partial => text.black().on_yellow(),
        Verdict::Incorrect => text.white().on_bright_black(),
        Verdict::Filled => text.bold(),
        Verdict::Empty => text.dimmed(),
    }
}

/// Render the board as six lines of five tiles
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| tile(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render the keyboard as three staggered QWERTY lines
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line = row
                .iter()
                .map(|&key| tile(key).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{line}", " ".repeat(i * 2))
        })
        .collect()
}
