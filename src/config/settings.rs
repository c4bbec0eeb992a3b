//! Configuration settings for pomw.
//!
//! Settings are loaded from `~/.pomw/config.yaml`.

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::PomwError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nominal focus interval in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break interval in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Play audio cues at phase transitions.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Where the cue sound files live; defaults to `~/.pomw/sounds/`.
    #[serde(default)]
    pub sounds_dir: Option<PathBuf>,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            sound: default_true(),
            sounds_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, PomwError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomwError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomwError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The nominal focus interval.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.focus_minutes))
    }

    /// The break interval.
    #[must_use]
    pub fn break_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.break_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.focus_minutes, 25);
        assert_eq!(config.break_minutes, 5);
        assert!(config.sound);
        assert!(config.sounds_dir.is_none());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.focus_minutes, 25);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "focus_minutes: 50\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.focus_minutes, 50);
        assert_eq!(config.break_minutes, 5);
        assert!(config.sound);
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "focus_minutes: [not a number").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.focus_duration(), Duration::minutes(25));
        assert_eq!(config.break_duration(), Duration::minutes(5));
    }
}
