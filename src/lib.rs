//! Wordo
//!
//! A terminal word-guessing game: six attempts to find a secret five-letter
//! word, with per-letter feedback after every valid guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordo::core::Letter;
//! use wordo::game::{GameConfig, GameEngine, Status};
//! use wordo::wordlists::WordLists;
//!
//! let lists = WordLists::from_slices(&["crane"], &["trace"]).unwrap();
//! let mut engine = GameEngine::new(&lists, GameConfig::default());
//!
//! for ch in "trace".chars() {
//!     engine.input_letter(Letter::from_char(ch).unwrap());
//! }
//! let submission = engine.submit_guess().unwrap();
//!
//! assert!(submission.score.is_perfect());
//! assert_eq!(engine.state().status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game engine, input dispatch and timed effects
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
