//! Shared handle to the terminal surface.

use std::io::{self, Stdout};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::traits::{Row, Screen};
use crate::error::PomwError;
use crate::tui::app::App;
use crate::tui::ui;

struct Inner {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
}

/// Cloneable handle to the one terminal.
///
/// The worker repaints the countdown through this while the event loop
/// flashes notices; each call takes the lock, mutates the row state,
/// and redraws the whole frame. Draw failures are swallowed - the
/// display is fire-and-forget to the scheduler.
#[derive(Clone)]
pub struct TerminalScreen {
    inner: Arc<Mutex<Inner>>,
}

impl TerminalScreen {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self, PomwError> {
        enable_raw_mode()
            .map_err(|e| PomwError::Terminal(format!("Failed to enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| PomwError::Terminal(format!("Failed to setup terminal: {e}")))?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| PomwError::Terminal(format!("Failed to create terminal: {e}")))?;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                terminal,
                app: App::new(),
            })),
        })
    }

    /// Put the terminal back the way we found it. Best-effort.
    pub fn restore(&self) {
        disable_raw_mode().ok();
        let mut inner = self.lock();
        execute!(inner.terminal.backend_mut(), LeaveAlternateScreen).ok();
        inner.terminal.show_cursor().ok();
    }

    /// Re-fit the surface after a terminal resize and repaint.
    pub fn refit(&self) {
        let mut inner = self.lock();
        inner.terminal.autoresize().ok();
        Self::redraw(&mut inner);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn redraw(inner: &mut Inner) {
        let Inner { terminal, app } = inner;
        let _ = terminal.draw(|frame| ui::render(frame, app));
    }
}

impl Screen for TerminalScreen {
    fn put_centered(&self, row: Row, text: &str) {
        let mut inner = self.lock();
        inner.app.set(row, text);
        Self::redraw(&mut inner);
    }

    fn put_for(&self, row: Row, text: &str, duration: Duration) {
        {
            let mut inner = self.lock();
            inner.app.set(row, text);
            Self::redraw(&mut inner);
        }

        // Hold the message, not the lock: the worker keeps ticking
        // underneath while the notice is up.
        thread::sleep(duration);

        let mut inner = self.lock();
        inner.app.clear_row(row);
        Self::redraw(&mut inner);
    }

    fn clear(&self) {
        let mut inner = self.lock();
        inner.app.clear();
        Self::redraw(&mut inner);
    }
}
