//! Commands for the presentation layer
//!
//! The engine never touches a UI. The session turns engine results into
//! [`Effect`]s; each is a [`UiCommand`] plus how long to wait before applying
//! it to a [`Surface`].

use crate::core::{Feedback, Letter};
use std::time::Duration;

/// How long an alert stays up before it is hidden
pub const ALERT_DURATION: Duration = Duration::from_secs(2);

/// Pause between coloring the last row and showing the win/loss overlay
pub const OVERLAY_DELAY: Duration = Duration::from_secs(1);

/// What a front-end has to provide
pub trait Surface {
    /// Letter currently shown in a board cell
    fn cell_text(&self, row: usize, col: usize) -> Option<Letter>;

    fn set_cell_text(&mut self, row: usize, col: usize, letter: Option<Letter>);

    fn set_cell_feedback(&mut self, row: usize, col: usize, feedback: Feedback);

    fn set_key_feedback(&mut self, letter: Letter, feedback: Feedback);

    fn show_alert(&mut self, message: &str);

    fn hide_alert(&mut self);

    fn show_end_overlay(&mut self, message: &str);

    fn hide_end_overlay(&mut self);

    /// Blank every cell and key for a new round
    fn clear_board(&mut self);
}

/// One change to apply to a [`Surface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetCellText {
        row: usize,
        col: usize,
        letter: Option<Letter>,
    },
    SetCellFeedback {
        row: usize,
        col: usize,
        feedback: Feedback,
    },
    SetKeyFeedback {
        letter: Letter,
        feedback: Feedback,
    },
    ShowAlert(String),
    HideAlert,
    ShowEndOverlay(String),
    HideEndOverlay,
    ClearBoard,
}

impl UiCommand {
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::SetCellText { row, col, letter } => surface.set_cell_text(*row, *col, *letter),
            Self::SetCellFeedback { row, col, feedback } => {
                surface.set_cell_feedback(*row, *col, *feedback);
            }
            Self::SetKeyFeedback { letter, feedback } => {
                surface.set_key_feedback(*letter, *feedback);
            }
            Self::ShowAlert(message) => surface.show_alert(message),
            Self::HideAlert => surface.hide_alert(),
            Self::ShowEndOverlay(message) => surface.show_end_overlay(message),
            Self::HideEndOverlay => surface.hide_end_overlay(),
            Self::ClearBoard => surface.clear_board(),
        }
    }
}

/// A command and the delay before it should be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub delay: Duration,
    pub command: UiCommand,
}

impl Effect {
    #[must_use]
    pub const fn now(command: UiCommand) -> Self {
        Self {
            delay: Duration::ZERO,
            command,
        }
    }

    #[must_use]
    pub const fn after(delay: Duration, command: UiCommand) -> Self {
        Self { delay, command }
    }

    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }
}
