//! Core session scheduler.
//!
//! Shared flags, the blocking session queue, the drift-corrected
//! countdown engine, and the background worker that drives one session
//! at a time.

pub mod countdown;
pub mod datetime;
pub mod flags;
pub mod queue;
pub mod request;
pub mod traits;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use flags::Flags;
pub use queue::BlockingQueue;
pub use request::{SessionRequest, TimewCommand};
pub use traits::{Chime, Cue, Row, Screen, Tracker};
pub use worker::Worker;
