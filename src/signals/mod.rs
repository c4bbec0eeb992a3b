//! Asynchronous session interrupts.
//!
//! `SIGUSR1` (sent by an operator or a cron job) pauses the current
//! countdown and enqueues a fresh QUERY session. The signal context
//! itself only runs signal-hook's pre-registered, allocation-free
//! handler; everything pomw does happens on a normally-scheduled
//! watcher thread, which is what keeps the queue push and the flag
//! store out of the restricted handler.

use std::sync::Arc;

use crate::core::flags::Flags;
use crate::core::queue::BlockingQueue;
use crate::core::request::SessionRequest;
use crate::error::PomwError;

/// Register the `SIGUSR1` watcher.
///
/// Every delivery pauses the countdown and pushes a copy of `request`.
///
/// # Errors
///
/// Returns an error if the handler cannot be registered or the watcher
/// thread cannot be spawned; the caller reports it once, transiently,
/// and the program continues without signal support.
#[cfg(unix)]
pub fn install(
    queue: Arc<BlockingQueue<SessionRequest>>,
    flags: Arc<Flags>,
    request: SessionRequest,
) -> Result<(), PomwError> {
    use signal_hook::consts::SIGUSR1;
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGUSR1]).map_err(|e| PomwError::Signal(e.to_string()))?;

    std::thread::Builder::new()
        .name("signal-watcher".to_string())
        .spawn(move || {
            for _ in signals.forever() {
                flags.pause();
                queue.push(request);
            }
        })
        .map_err(|e| PomwError::Signal(e.to_string()))?;

    Ok(())
}

/// Signal handling is not supported on this platform.
///
/// # Errors
///
/// Always returns an error; the caller degrades to running without
/// asynchronous-interrupt support.
#[cfg(not(unix))]
pub fn install(
    _queue: Arc<BlockingQueue<SessionRequest>>,
    _flags: Arc<Flags>,
    _request: SessionRequest,
) -> Result<(), PomwError> {
    Err(PomwError::Signal(
        "signal handling is not supported on this platform".to_string(),
    ))
}
