//! Collaborator seams for the session scheduler.
//!
//! The worker and the countdown engine only see these traits; the
//! concrete terminal, Timewarrior, and audio implementations live in
//! their own modules. Tests substitute doubles at the same seams.

use std::sync::Arc;
use std::time::Duration;

use crate::error::PomwError;
use crate::timew::TrackingSnapshot;

/// Rows of the status surface.
///
/// The surface is tiny and fixed: a two-row timer pane plus a command
/// pane with a help line, a task line, and a transient notice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// Phase title ("Focus!" / "Break").
    Title,
    /// Remaining time, re-rendered every tick.
    Remaining,
    /// Key help line.
    Commands,
    /// Description of the tracked task.
    Task,
    /// Transient messages (errors, "already running").
    Notice,
}

/// The display collaborator.
///
/// Everything here is fire-and-forget; rendering failures are not the
/// scheduler's problem. `put_for` blocks the calling path for the given
/// interval and then erases the row, which is what bounds how long an
/// error message occupies the notice line.
pub trait Screen {
    /// Show `text` centered on `row`.
    fn put_centered(&self, row: Row, text: &str);

    /// Show `text` on `row` for `duration`, then erase it.
    fn put_for(&self, row: Row, text: &str, duration: Duration);

    /// Erase every row.
    fn clear(&self);
}

impl<S: Screen + ?Sized> Screen for Arc<S> {
    fn put_centered(&self, row: Row, text: &str) {
        (**self).put_centered(row, text);
    }

    fn put_for(&self, row: Row, text: &str, duration: Duration) {
        (**self).put_for(row, text, duration);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// The time-tracking collaborator.
///
/// A snapshot is fetched fresh at the start of every session and never
/// cached across sessions. Any call may fail with a recoverable error
/// carrying a human-readable message.
#[cfg_attr(test, mockall::automock)]
pub trait Tracker {
    /// Fetch the current tracking state.
    fn query(&self) -> Result<TrackingSnapshot, PomwError>;

    /// Start (or continue) tracking; returns the raw command output
    /// from which a task description is derived.
    fn resume(&self) -> Result<String, PomwError>;

    /// Stop tracking.
    fn stop(&self) -> Result<(), PomwError>;
}

/// Audio cues played at phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Focus interval finished.
    FocusEnd,
    /// Break interval finished.
    BreakEnd,
}

impl Cue {
    /// File name of the shipped sound for this cue.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::FocusEnd => "Retro_Synth.ogg",
            Self::BreakEnd => "Synth_Brass.ogg",
        }
    }
}

/// The audio collaborator. Best-effort: callers decide whether a
/// failure is worth showing.
pub trait Chime {
    /// Play the given cue without blocking the caller.
    fn play(&self, cue: Cue) -> Result<(), PomwError>;
}

impl<C: Chime + ?Sized> Chime for Arc<C> {
    fn play(&self, cue: Cue) -> Result<(), PomwError> {
        (**self).play(cue)
    }
}
