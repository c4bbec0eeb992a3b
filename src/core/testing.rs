//! Shared test doubles for the scheduler seams.

use std::sync::Mutex;
use std::time::Duration;

use crate::core::traits::{Chime, Cue, Row, Screen};
use crate::error::PomwError;

/// One recorded display call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Put(Row, String),
    PutFor(Row, String),
    Clear,
}

/// A `Screen` that records every call and never blocks.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    events: Mutex<Vec<ScreenEvent>>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.lock().unwrap().clone()
    }

    /// All texts shown on `row`, transient or not, in call order.
    pub fn puts_on(&self, row: Row) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ScreenEvent::Put(r, text) | ScreenEvent::PutFor(r, text) if r == row => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Texts flashed on the notice row.
    pub fn notices(&self) -> Vec<String> {
        self.puts_on(Row::Notice)
    }
}

impl Screen for RecordingScreen {
    fn put_centered(&self, row: Row, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ScreenEvent::Put(row, text.to_string()));
    }

    fn put_for(&self, row: Row, text: &str, _duration: Duration) {
        self.events
            .lock()
            .unwrap()
            .push(ScreenEvent::PutFor(row, text.to_string()));
    }

    fn clear(&self) {
        self.events.lock().unwrap().push(ScreenEvent::Clear);
    }
}

/// A `Chime` that records played cues and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingChime {
    played: Mutex<Vec<Cue>>,
    fail_focus_end: bool,
}

impl CountingChime {
    pub fn new() -> Self {
        Self::default()
    }

    /// A chime whose focus-end cue fails.
    pub fn failing_focus_end() -> Self {
        Self {
            played: Mutex::new(Vec::new()),
            fail_focus_end: true,
        }
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl Chime for CountingChime {
    fn play(&self, cue: Cue) -> Result<(), PomwError> {
        self.played.lock().unwrap().push(cue);
        if self.fail_focus_end && cue == Cue::FocusEnd {
            return Err(PomwError::Audio("cue failed".to_string()));
        }
        Ok(())
    }
}
