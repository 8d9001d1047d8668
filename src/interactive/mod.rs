//! Interactive TUI interface
//!
//! A ratatui/crossterm front-end over the game session. The [`Screen`] it
//! draws from is also used by the line-based mode.

pub mod app;
pub mod input;
pub mod rendering;
pub mod screen;

pub use app::{App, run_tui};
pub use input::{KeyMap, Layer};
pub use screen::{Screen, Tile};
