//! Session requests.

use chrono::Duration;

/// How the worker should resolve a session against Timewarrior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimewCommand {
    /// Reserved sentinel used only to unblock the worker at shutdown.
    /// Never interpreted as a real session.
    None,
    /// Query the current tracking state; run the full focus interval.
    Query,
    /// Continue tracking, crediting already-tracked time against the
    /// focus interval.
    Resume,
}

/// One focus/break pair plus the command describing how to resolve it.
///
/// Immutable once constructed; ownership transfers fully to whichever
/// `wait_pop` receives it, and it is consumed exactly once.
#[derive(Debug, Clone, Copy)]
pub struct SessionRequest {
    /// Nominal focus interval length.
    pub focus: Duration,
    /// Break interval length.
    pub rest: Duration,
    /// Resolution command.
    pub command: TimewCommand,
}

impl SessionRequest {
    /// Build a request.
    #[must_use]
    pub const fn new(focus: Duration, rest: Duration, command: TimewCommand) -> Self {
        Self {
            focus,
            rest,
            command,
        }
    }

    /// The shutdown sentinel. Carries no usable durations.
    #[must_use]
    pub fn shutdown() -> Self {
        Self::new(Duration::zero(), Duration::zero(), TimewCommand::None)
    }

    /// Whether this is the shutdown sentinel.
    #[must_use]
    pub const fn is_shutdown(&self) -> bool {
        matches!(self.command, TimewCommand::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_sentinel() {
        let request = SessionRequest::shutdown();
        assert!(request.is_shutdown());
        assert_eq!(request.command, TimewCommand::None);
    }

    #[test]
    fn test_real_request_is_not_sentinel() {
        let request = SessionRequest::new(
            Duration::minutes(25),
            Duration::minutes(5),
            TimewCommand::Resume,
        );
        assert!(!request.is_shutdown());
        assert_eq!(request.focus, Duration::minutes(25));
        assert_eq!(request.rest, Duration::minutes(5));
    }
}
