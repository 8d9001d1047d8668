//! Printing the game for the line-based mode

use super::formatters::{banner, tile};
use crate::core::{Letter, MAX_GUESSES, WORD_LENGTH};
use crate::game::SessionStats;
use crate::interactive::Screen;
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print the six board rows
pub fn print_board(screen: &Screen) {
    println!();
    for row in 0..MAX_GUESSES {
        let mut line = String::from("   ");
        for col in 0..WORD_LENGTH {
            let t = screen.tile(row, col);
            line.push_str(&format!("{} ", tile(t.letter, t.feedback)));
        }
        println!("{line}");
    }
    println!();
}

/// Print the keyboard with every key's best feedback
pub fn print_keyboard(screen: &Screen) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .filter_map(Letter::from_char)
            .map(|letter| tile(Some(letter), screen.key(letter)).to_string())
            .collect();
        println!("{}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print an alert line
pub fn print_alert(message: &str) {
    println!("  {}", format!(" {message} ").black().on_white().bold());
}

/// Print the end-of-round overlay
pub fn print_overlay(message: &str) {
    println!();
    for line in banner(message, 34) {
        println!("  {}", line.bright_cyan());
    }
    println!();
}

/// Print session totals on exit
pub fn print_summary(stats: &SessionStats, streak: u32) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "SESSION".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("   Games played:   {}", stats.games_played);
    println!(
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak: {streak}");
    println!("   Best streak:    {}", stats.max_streak);

    if stats.games_won > 0 {
        println!("\n   {}", "Guess distribution:".bright_cyan());
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            let width = count * 30 / stats.games_won;
            println!(
                "   {}: {}{} {count}",
                i + 1,
                "█".repeat(width).green(),
                "░".repeat(30 - width).bright_black()
            );
        }
    }
    println!();
}
