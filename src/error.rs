//! Error types for pomw.
//!
//! Collaborator failures are recoverable: the scheduler shows them
//! transiently on the command row and returns to waiting for the next
//! session. Nothing in this enum is fatal to the process except a
//! failure to stand the terminal up in the first place.

use thiserror::Error;

/// All errors produced by pomw.
#[derive(Error, Debug)]
pub enum PomwError {
    /// The `timew` binary failed or produced unusable output.
    #[error("timew: {0}")]
    Tracker(String),

    /// Configuration file or CLI argument problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Audio device or cue file problem.
    #[error("Audio error: {0}")]
    Audio(String),

    /// Terminal setup or rendering problem.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Signal handler registration problem.
    #[error("Signal error: {0}")]
    Signal(String),

    /// Failed to parse JSON from `timew export`.
    #[error("Failed to parse timew output: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error (spawning `timew`, reading sound files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PomwError {
    /// Build a tracker error from a subprocess's stderr.
    ///
    /// Keeps only the first non-empty line so the message fits the
    /// transient display row.
    #[must_use]
    pub fn from_stderr(stderr: &str) -> Self {
        let line = stderr
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("command failed with no output");
        Self::Tracker(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stderr_first_line() {
        let err = PomwError::from_stderr("There is no active time tracking.\nUsage: timew stop\n");
        assert_eq!(err.to_string(), "timew: There is no active time tracking.");
    }

    #[test]
    fn test_from_stderr_skips_blank_lines() {
        let err = PomwError::from_stderr("\n\n  boom  \n");
        assert_eq!(err.to_string(), "timew: boom");
    }

    #[test]
    fn test_from_stderr_empty() {
        let err = PomwError::from_stderr("");
        assert_eq!(err.to_string(), "timew: command failed with no output");
    }
}
