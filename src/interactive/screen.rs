//! What the player currently sees
//!
//! `Screen` is the crate's [`Surface`]: effects are applied to it, and both
//! front-ends render from it.

use crate::core::{Feedback, Letter, MAX_GUESSES, WORD_LENGTH};
use crate::game::Surface;

/// One board tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<Letter>,
    pub feedback: Option<Feedback>,
}

/// Visible board, keyboard colors, alert and overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    tiles: [[Tile; WORD_LENGTH]; MAX_GUESSES],
    keys: [Option<Feedback>; Letter::COUNT],
    alert: Option<String>,
    overlay: Option<String>,
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[row][col]
    }

    #[must_use]
    pub const fn key(&self, letter: Letter) -> Option<Feedback> {
        self.keys[letter.index()]
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    #[must_use]
    pub const fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

impl Surface for Screen {
    fn cell_text(&self, row: usize, col: usize) -> Option<Letter> {
        self.tiles[row][col].letter
    }

    fn set_cell_text(&mut self, row: usize, col: usize, letter: Option<Letter>) {
        let tile = &mut self.tiles[row][col];
        tile.letter = letter;
        if letter.is_none() {
            tile.feedback = None;
        }
    }

    fn set_cell_feedback(&mut self, row: usize, col: usize, feedback: Feedback) {
        self.tiles[row][col].feedback = Some(feedback);
    }

    fn set_key_feedback(&mut self, letter: Letter, feedback: Feedback) {
        self.keys[letter.index()] = Some(feedback);
    }

    fn show_alert(&mut self, message: &str) {
        self.alert = Some(message.to_owned());
    }

    fn hide_alert(&mut self) {
        self.alert = None;
    }

    fn show_end_overlay(&mut self, message: &str) {
        self.overlay = Some(message.to_owned());
    }

    fn hide_end_overlay(&mut self) {
        self.overlay = None;
    }

    fn clear_board(&mut self) {
        self.tiles = [[Tile::default(); WORD_LENGTH]; MAX_GUESSES];
        self.keys = [None; Letter::COUNT];
    }
}
