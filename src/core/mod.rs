//! Core domain types for the game
//!
//! Pure value types with no knowledge of the engine or any front-end:
//! letters, words, per-letter feedback and the keyboard aggregate.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::{Feedback, Score, ScoringRule};
pub use keyboard::KeyboardState;
pub use letter::Letter;
pub use word::{Word, WordError};

/// Letters per word (and cells per board row)
pub const WORD_LENGTH: usize = 5;

/// Guess attempts per round (and rows on the board)
pub const MAX_GUESSES: usize = 6;
