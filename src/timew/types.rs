//! Data types for the Timewarrior client.

use chrono::Duration;
use serde::Deserialize;

/// Snapshot of the current tracking state, fetched fresh at the start
/// of each session and never cached across sessions.
#[derive(Debug, Clone)]
pub struct TrackingSnapshot {
    /// Whether an interval is currently open.
    pub is_tracking: bool,
    /// Time accumulated on the current (or most recent) interval.
    pub tracked: Duration,
    /// Tags of the interval, joined for display.
    pub task_description: String,
}

impl Default for TrackingSnapshot {
    fn default() -> Self {
        Self {
            is_tracking: false,
            tracked: Duration::zero(),
            task_description: String::new(),
        }
    }
}

/// One interval as emitted by `timew export`.
#[derive(Debug, Clone, Deserialize)]
pub struct Interval {
    /// Start timestamp, `20260808T101500Z` layout.
    pub start: String,
    /// End timestamp; absent while the interval is open.
    #[serde(default)]
    pub end: Option<String>,
    /// Interval tags.
    #[serde(default)]
    pub tags: Vec<String>,
}
