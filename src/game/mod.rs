//! Game engine and the plumbing around it
//!
//! - [`GameEngine`] owns one round's [`GameState`] plus the session streak
//! - [`Session`] maps logical [`Input`]s to engine operations and returns
//!   [`Effect`]s for a [`Surface`]
//! - [`Timeline`] releases delayed effects once they fall due

mod effects;
mod engine;
mod session;
mod state;
mod stats;
mod timeline;

pub use effects::{ALERT_DURATION, Effect, OVERLAY_DELAY, Surface, UiCommand};
pub use engine::{GameConfig, GameEngine, GuessError, Outcome, Submission};
pub use session::{Input, Session, alert};
pub use state::{Board, GameState, Status};
pub use stats::SessionStats;
pub use timeline::Timeline;
