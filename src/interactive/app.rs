//! TUI application state and logic

use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen the shell is showing
///
/// The game itself has no notion of screens; navigating to `Solved` when the
/// puzzle completes is purely a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The board and keyboard, accepting guesses
    Board,
    /// The success view shown once the puzzle is solved
    Solved,
}

/// Application state
pub struct App {
    pub game: Game,
    pub screen: Screen,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            screen: Screen::Board,
            should_quit: false,
        }
    }

    /// Start a fresh game against the same target
    pub fn new_game(&mut self) {
        self.game.reset();
        self.screen = Screen::Board;
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.game.push_char(c);
            }
            KeyCode::Backspace => {
                self.game.delete_char();
            }
            KeyCode::Enter => {
                self.game.submit_row();
                if self.game.is_solved() {
                    self.screen = Screen::Solved;
                }
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_solved_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.new_game();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.screen {
                    Screen::Board => app.handle_board_key(key.code),
                    Screen::Solved => app.handle_solved_key(key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    fn app() -> App {
        let words = WordList::from_words(["palms", "slate"]);
        App::new(Game::new(Word::new("palms").unwrap(), words))
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.handle_board_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn letters_flow_into_the_game() {
        let mut a = app();
        type_word(&mut a, "sl");
        assert_eq!(a.game.cursor(), (0, 2));
        assert_eq!(a.game.board().row_text(0), "SL");
    }

    #[test]
    fn non_letter_keys_are_ignored_on_the_board() {
        let mut a = app();
        a.handle_board_key(KeyCode::Char('1'));
        a.handle_board_key(KeyCode::Tab);
        assert_eq!(a.game.cursor(), (0, 0));
    }

    #[test]
    fn backspace_deletes() {
        let mut a = app();
        type_word(&mut a, "sla");
        a.handle_board_key(KeyCode::Backspace);
        assert_eq!(a.game.board().row_text(0), "SL");
    }

    #[test]
    fn winning_guess_navigates_to_the_success_screen() {
        let mut a = app();
        type_word(&mut a, "palms");
        a.handle_board_key(KeyCode::Enter);

        assert!(a.game.is_solved());
        assert_eq!(a.screen, Screen::Solved);
    }

    #[test]
    fn wrong_guess_stays_on_the_board_screen() {
        let mut a = app();
        type_word(&mut a, "slate");
        a.handle_board_key(KeyCode::Enter);

        assert_eq!(a.screen, Screen::Board);
        assert_eq!(a.game.cursor(), (1, 0));
    }

    #[test]
    fn success_screen_n_starts_a_new_game() {
        let mut a = app();
        type_word(&mut a, "palms");
        a.handle_board_key(KeyCode::Enter);
        a.handle_solved_key(KeyCode::Char('n'));

        assert_eq!(a.screen, Screen::Board);
        assert_eq!(a.game.cursor(), (0, 0));
        assert!(!a.game.is_solved());
    }

    #[test]
    fn success_screen_q_quits() {
        let mut a = app();
        a.handle_solved_key(KeyCode::Char('q'));
        assert!(a.should_quit);
    }

    #[test]
    fn escape_quits_from_the_board() {
        let mut a = app();
        a.handle_board_key(KeyCode::Esc);
        assert!(a.should_quit);
    }
}
