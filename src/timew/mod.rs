//! Timewarrior integration.
//!
//! `timew` is the system of record for what the user is working on and
//! for how long. pomw queries and mutates it once per session via the
//! `timew` binary; it never touches Timewarrior's own storage.

pub mod client;
pub mod types;

pub use client::{format_description, parse_snapshot, TimewClient};
pub use types::{Interval, TrackingSnapshot};
