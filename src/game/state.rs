//! Mutable state of a single round

use crate::core::{KeyboardState, Letter, MAX_GUESSES, WORD_LENGTH, Word};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Letters entered on the 6×5 board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Letter>; WORD_LENGTH]; MAX_GUESSES],
}

impl Board {
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: Option<Letter>) {
        self.cells[row][col] = letter;
    }

    /// All five letters of a row, or `None` if any cell is empty
    #[must_use]
    pub fn full_row(&self, row: usize) -> Option<[Letter; WORD_LENGTH]> {
        let letters: Vec<Letter> = self.cells[row].iter().copied().collect::<Option<_>>()?;
        letters.try_into().ok()
    }
}

/// Everything that changes while a round is played
///
/// Only the streak survives into the next round.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) secret: Word,
    pub(crate) cursor_row: usize,
    pub(crate) cursor_column: usize,
    pub(crate) guess_count: usize,
    pub(crate) streak: u32,
    pub(crate) status: Status,
    pub(crate) board: Board,
    pub(crate) keyboard: KeyboardState,
}

impl GameState {
    /// Fresh round with the given secret, carrying `streak` over
    #[must_use]
    pub fn new(secret: Word, streak: u32) -> Self {
        Self {
            secret,
            cursor_row: 0,
            cursor_column: 0,
            guess_count: 1,
            streak,
            status: Status::InProgress,
            board: Board::default(),
            keyboard: KeyboardState::new(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Active attempt, 0-indexed
    #[must_use]
    pub const fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    /// Next empty slot in the active row; 5 when the row is full
    #[must_use]
    pub const fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    /// Attempts used so far, counting the one in progress
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_origin() {
        let state = GameState::new(Word::new("trace").unwrap(), 4);
        assert_eq!(state.cursor_row(), 0);
        assert_eq!(state.cursor_column(), 0);
        assert_eq!(state.guess_count(), 1);
        assert_eq!(state.streak(), 4);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.board(), &Board::default());
    }

    #[test]
    fn full_row_requires_every_cell() {
        let mut board = Board::default();
        let a = Letter::from_char('a').unwrap();
        for col in 0..4 {
            board.set(2, col, Some(a));
        }
        assert!(board.full_row(2).is_none());

        board.set(2, 4, Some(a));
        assert_eq!(board.full_row(2), Some([a; WORD_LENGTH]));
        assert!(board.full_row(0).is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!Status::InProgress.is_over());
        assert!(Status::Won.is_over());
        assert!(Status::Lost.is_over());
    }
}
