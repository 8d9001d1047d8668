//! In-memory session statistics

use crate::core::MAX_GUESSES;

/// Counters for the current session; never persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is a one-guess win
    pub guess_distribution: [usize; MAX_GUESSES],
    pub max_streak: u32,
}

impl SessionStats {
    pub(crate) fn record_win(&mut self, guesses: usize, streak: u32) {
        self.games_played += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses.saturating_sub(1)) {
            *slot += 1;
        }
        self.max_streak = self.max_streak.max(streak);
    }

    pub(crate) fn record_loss(&mut self) {
        self.games_played += 1;
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
