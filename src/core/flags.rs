//! Shared scheduler flags.
//!
//! Two independently read and written booleans visible to both control
//! paths. They are hints, not synchronization primitives: all accesses
//! are `Relaxed`, and a stale read only delays a reaction by at most
//! one countdown tick. Nothing depends on observing the pair together.

use std::sync::atomic::{AtomicBool, Ordering};

/// The `running`/`paused` flag pair.
///
/// `running` starts true and is cleared exactly once at shutdown; it
/// never becomes true again. `paused` starts true (no session active at
/// launch) and is toggled by both the worker and the interactive path.
#[derive(Debug)]
pub struct Flags {
    running: AtomicBool,
    paused: AtomicBool,
}

impl Flags {
    /// Flags in their process-start state: running, paused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
            paused: AtomicBool::new(true),
        }
    }

    /// Whether the process is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Enter the terminal state. One-shot; there is no way back.
    pub fn shut_down(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Whether the countdown is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Pause the countdown. Observed within one tick.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    /// Resume the countdown.
    pub fn unpause(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}
