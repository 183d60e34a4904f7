//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one line per guess, colored board and
//! keyboard printed after every turn.

use crate::core::WORD_LEN;
use crate::game::{Game, Phase};
use crate::output::{board_lines, keyboard_lines};
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Guess - Simple CLI Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word. You have six tries.");
    println!("After each guess the board shows your feedback:");
    println!("  - green:  right letter, right spot");
    println!("  - yellow: right letter, wrong spot");
    println!("  - gray:   letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    loop {
        print_state(game);

        if game.is_solved() {
            let guesses = game.cursor().0 + 1;
            print_win_banner(guesses);
            if !ask_play_again()? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        if game.out_of_guesses() {
            println!(
                "\n{} The word was {}.\n",
                "Out of guesses!".red().bold(),
                game.target().text().bright_yellow().bold()
            );
            if !ask_play_again()? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        let prompt = format!("Guess {}", game.cursor().0 + 1);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.reset();
                println!("\nNew game started!\n");
                continue;
            }
            _ => {}
        }

        // Replace whatever is on the active row with this line's letters,
        // then submit. The state machine drops overflow silently.
        while game.cursor().1 > 0 {
            game.delete_char();
        }
        for ch in input.chars().filter(char::is_ascii_alphabetic) {
            game.push_char(ch);
        }

        let before = game.cursor();
        game.submit_row();

        // Rejection is a silent no-op in the core; interpret it here.
        if game.phase() == Phase::InProgress && game.cursor() == before {
            if before.1 < WORD_LEN {
                println!("\n{}\n", "Guesses must be exactly 5 letters.".red());
            } else if !game.out_of_guesses() {
                println!(
                    "\n{}\n",
                    format!("'{}' is not in the word list.", input.to_uppercase()).red()
                );
            }
        }
    }
}

fn print_state(game: &Game) {
    println!();
    for line in board_lines(game.board()) {
        println!("  {line}");
    }
    println!();
    for line in keyboard_lines(game.keyboard()) {
        println!("  {line}");
    }
    println!();
}

fn print_win_banner(guesses: usize) {
    println!("\n{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "            ✨  Y O U   G O T   I T !  ✨            "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());

    let praise = match guesses {
        1 => "Incredible hole-in-one!",
        2 => "Outstanding!",
        3 => "Very well played!",
        4 => "Nice work!",
        5 => "Got it!",
        _ => "Phew, that was close!",
    };

    println!(
        "\n  {} Solved in {} {}.\n",
        praise.bright_white(),
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
