//! TUI application state and event loop

use super::input::{KeyMap, Layer};
use super::screen::Screen;
use crate::game::{Input, Session, Timeline};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest the loop sleeps waiting for a key when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub screen: Screen,
    pub timeline: Timeline,
    pub keymap: KeyMap,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self {
            session,
            screen: Screen::new(),
            timeline: Timeline::new(),
            keymap: KeyMap::new(),
            should_quit: false,
        }
    }

    /// Key focus follows the overlay
    #[must_use]
    pub const fn layer(&self) -> Layer {
        if self.screen.overlay_visible() {
            Layer::Overlay
        } else {
            Layer::Board
        }
    }

    /// Feed one input through the session and schedule its effects
    pub fn dispatch(&mut self, input: Input, now: Instant) {
        if input == Input::Quit {
            self.should_quit = true;
            return;
        }
        let effects = self.session.handle(input);
        self.timeline.schedule(now, effects);
        self.tick(now);
    }

    /// Apply every command that has fallen due
    pub fn tick(&mut self, now: Instant) {
        for command in self.timeline.take_due(now) {
            debug!(?command, "apply");
            command.apply(&mut self.screen);
        }
    }

    /// How long the event loop may block before the next scheduled command
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timeline
            .time_until_next(now)
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press
                    && let Some(input) = app.keymap.resolve(key, app.layer())
                {
                    app.dispatch(input, Instant::now());
                }
            }
        } else {
            app.tick(Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
