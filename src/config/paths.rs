//! Path resolution for pomw configuration and data files.
//!
//! All pomw data is stored in `~/.pomw/`:
//! - `config.yaml` - Main configuration file
//! - `sounds/` - Cue sound files

use std::path::PathBuf;

use crate::error::PomwError;

/// Paths to pomw configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomw/`
    pub root: PathBuf,
    /// Config file: `~/.pomw/config.yaml`
    pub config_file: PathBuf,
    /// Sounds directory: `~/.pomw/sounds/`
    pub sounds: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomwError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomwError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomw")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            sounds: root.join("sounds"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomwError> {
        for dir in [&self.root, &self.sounds] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    PomwError::Config(format!("Failed to create directory {:?}: {}", dir, e))
                })?;
            }
        }

        Ok(())
    }
}
