//! Configuration management for pomw.
//!
//! This module handles loading configuration from `~/.pomw/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Config;
