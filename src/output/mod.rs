//! Terminal output formatting
//!
//! Colored tiles, keyboard and banners for the line-based mode.

pub mod display;
pub mod formatters;

pub use display::{print_alert, print_board, print_keyboard, print_overlay, print_summary};
