//! Subprocess driver for the `timew` binary.

use std::process::Command;

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::traits::Tracker;
use crate::error::PomwError;
use crate::timew::types::{Interval, TrackingSnapshot};

/// Timestamp layout used by `timew export` (e.g. `20260808T101500Z`).
const EXPORT_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// First line of `timew continue`/`timew start` output, which names the
/// tags now being tracked.
static TRACKING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^Tracking\s+(.+)$").unwrap_or_else(|e| panic!("Invalid tracking regex: {e}"))
});

/// Client for the Timewarrior CLI.
#[derive(Clone)]
pub struct TimewClient;

impl TimewClient {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run `timew` with the given arguments and return its stdout.
    fn execute(&self, args: &[&str]) -> Result<String, PomwError> {
        let output = Command::new("timew").args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PomwError::from_stderr(&stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TimewClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker for TimewClient {
    fn query(&self) -> Result<TrackingSnapshot, PomwError> {
        let active = self.execute(&["get", "dom.active"])?;
        if active.trim() != "1" {
            return Ok(TrackingSnapshot::default());
        }

        let json = self.execute(&["export", "@1"])?;
        parse_snapshot(&json, Utc::now())
    }

    fn resume(&self) -> Result<String, PomwError> {
        self.execute(&["continue"])
    }

    fn stop(&self) -> Result<(), PomwError> {
        self.execute(&["stop"]).map(|_| ())
    }
}

/// Parse a `timew export @1` payload into a snapshot.
///
/// `now` is passed in so tests can pin the clock; tracked time on an
/// open interval is measured against it.
///
/// # Errors
///
/// Returns an error if the JSON or a timestamp inside it is malformed.
pub fn parse_snapshot(json: &str, now: DateTime<Utc>) -> Result<TrackingSnapshot, PomwError> {
    let mut intervals: Vec<Interval> = serde_json::from_str(json)?;
    let Some(interval) = intervals.pop() else {
        return Ok(TrackingSnapshot::default());
    };

    let start = parse_export_time(&interval.start)?;
    let tracked = match interval.end.as_deref() {
        Some(end) => parse_export_time(end)? - start,
        None => now.signed_duration_since(start),
    };

    Ok(TrackingSnapshot {
        is_tracking: interval.end.is_none(),
        tracked,
        task_description: interval.tags.join(" "),
    })
}

fn parse_export_time(raw: &str) -> Result<DateTime<Utc>, PomwError> {
    NaiveDateTime::parse_from_str(raw, EXPORT_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| PomwError::Tracker(format!("bad timestamp {raw:?}: {e}")))
}

/// Derive a one-line task description from `timew continue` output.
///
/// Timewarrior quotes tags containing spaces; the quotes are dropped
/// for display. Returns an empty string when no `Tracking` line is
/// present (e.g. tag-less tracking).
#[must_use]
pub fn format_description(output: &str) -> String {
    TRACKING_LINE
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map_or_else(String::new, |m| m.as_str().replace('"', "").trim().to_string())
}
