//! pomw - a Timewarrior Pomodoro timer for the terminal
//!
//! This crate alternates timed focus and break intervals, drives the
//! external `timew` time-tracking CLI, and plays audio cues at phase
//! transitions. A background worker consumes session requests from a
//! blocking queue; the interactive event loop and a `SIGUSR1` handler
//! are the producers.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod signals;
pub mod timew;
pub mod tui;

pub use cli::args::Cli;
pub use error::PomwError;
pub use timew::TimewClient;
