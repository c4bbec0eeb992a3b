//! Terminal surface for the timer.
//!
//! Built with ratatui and crossterm. The surface is shared between the
//! worker (which repaints the countdown every tick) and the interactive
//! event loop (which flashes transient notices and handles resize), so
//! the terminal lives behind a cloneable locked handle.

mod app;
pub mod event;
mod screen;
mod ui;

pub use app::App;
pub use screen::TerminalScreen;

/// Key help shown on the command row.
pub const COMMANDS_HELP: &str = "commands: (c)ontinue, (p)ause, (e)xit";
