//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is one guess; delays are
//! collapsed because there is no clock between prompts.

use crate::core::{Letter, MAX_GUESSES, WORD_LENGTH};
use crate::game::{Effect, GuessError, Input, Session, UiCommand, alert};
use crate::interactive::Screen;
use crate::output::{print_alert, print_board, print_keyboard, print_overlay, print_summary};
use anyhow::Result;
use std::io::{self, Write};

/// Something to print after the board is redrawn
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Alert(String),
    Overlay(String),
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordo - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret five-letter word in {MAX_GUESSES} tries.");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: letter is in the word somewhere else");
    println!("  - Gray: letter is not in the word\n");
    println!("Commands: 'quit' to exit\n");

    let mut screen = Screen::new();
    let mut notices: Vec<Notice> = Vec::new();

    loop {
        print_board(&screen);
        print_keyboard(&screen);
        for notice in notices.drain(..) {
            match notice {
                Notice::Alert(message) => print_alert(&message),
                Notice::Overlay(message) => print_overlay(&message),
            }
        }

        if session.state().status().is_over() {
            let Some(answer) = get_user_input("Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                notices = apply(session.handle(Input::PlayAgain), &mut screen);
                println!("\n🔄 New round started!");
                continue;
            }
            break;
        }

        let prompt = format!("Guess {}/{MAX_GUESSES}", session.state().guess_count());
        let Some(line) = get_user_input(&prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            word => notices = apply(submit_line(&mut session, word), &mut screen),
        }
    }

    print_summary(session.stats(), session.state().streak());
    println!("👋 Thanks for playing!\n");
    Ok(())
}

/// Replace the active row with the line's letters and press enter
///
/// The line must be exactly five letters; anything else is rejected with an
/// alert and never reaches the engine.
fn submit_line(session: &mut Session, word: &str) -> Vec<Effect> {
    let mut effects = Vec::new();
    for _ in 0..WORD_LENGTH {
        effects.extend(session.handle(Input::Backspace));
    }

    let letters: Option<Vec<Letter>> = word.chars().map(Letter::from_char).collect();
    match letters {
        Some(letters) if letters.len() == WORD_LENGTH => {
            for letter in letters {
                effects.extend(session.handle(Input::Letter(letter)));
            }
            effects.extend(session.handle(Input::Enter));
        }
        _ if word.chars().count() > WORD_LENGTH => {
            effects.extend(alert("Too many letters".to_string()));
        }
        _ => effects.extend(alert(GuessError::TooShort.to_string())),
    }
    effects
}

/// Apply effects in order, keeping anything that should be printed
fn apply(effects: Vec<Effect>, screen: &mut Screen) -> Vec<Notice> {
    let mut notices = Vec::new();
    for effect in effects {
        match &effect.command {
            UiCommand::ShowAlert(message) => notices.push(Notice::Alert(message.clone())),
            UiCommand::ShowEndOverlay(message) => notices.push(Notice::Overlay(message.clone())),
            _ => {}
        }
        effect.command.apply(screen);
    }
    notices
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
