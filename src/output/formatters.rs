//! Formatting utilities for terminal output

use crate::core::{Feedback, Letter};
use colored::{ColoredString, Colorize};

/// A board tile or key label with its feedback colors
#[must_use]
pub fn tile(letter: Option<Letter>, feedback: Option<Feedback>) -> ColoredString {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    match feedback {
        Some(Feedback::Correct) => text.white().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black().bold(),
        None if letter.is_some() => text.black().on_white().bold(),
        None => text.bright_black(),
    }
}

/// Split a multi-line message into a boxed banner
#[must_use]
pub fn banner(message: &str, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(2);
    let mut lines = vec![format!("╔{}╗", "═".repeat(inner))];
    for text in message.lines() {
        lines.push(format!("║{text:^inner$}║"));
    }
    lines.push(format!("╚{}╝", "═".repeat(inner)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        let a = Letter::from_char('a');
        let text = plain(|| tile(a, Some(Feedback::Correct)).to_string());
        assert_eq!(text, " A ");
    }

    #[test]
    fn empty_tile_placeholder() {
        let text = plain(|| tile(None, None).to_string());
        assert_eq!(text, " · ");
    }

    #[test]
    fn banner_centers_each_line() {
        let lines = banner("You win!\nStreak 2", 14);
        assert_eq!(
            lines,
            vec![
                "╔════════════╗".to_string(),
                "║  You win!  ║".to_string(),
                "║  Streak 2  ║".to_string(),
                "╚════════════╝".to_string(),
            ]
        );
    }

    #[test]
    fn banner_keeps_blank_lines() {
        let lines = banner("a\n\nb", 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "║   ║");
    }
}
