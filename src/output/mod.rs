//! Terminal output formatting
//!
//! Colored board and keyboard rendering for the plain CLI mode.

pub mod formatters;

pub use formatters::{board_lines, keyboard_lines};
