//! Game state: board, shared keyboard and the turn state machine
//!
//! Pure state plus transition logic. Rendering lives in `interactive` and
//! `output`; dictionary membership lives in `wordlists`.

mod board;
mod keyboard;
mod state;

pub use board::{Board, ROWS};
pub use keyboard::{KEY_LAYOUT, Keyboard};
pub use state::{Game, Phase};
