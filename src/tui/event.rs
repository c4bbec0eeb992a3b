//! Interactive command loop.
//!
//! This is the producer side of the scheduler: each key becomes either
//! a shared-flag mutation or a request pushed onto the session queue.
//! Reading the next event is the loop's only blocking wait.

use std::time::Duration as StdDuration;

use chrono::Duration;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::core::queue::BlockingQueue;
use crate::core::request::{SessionRequest, TimewCommand};
use crate::core::traits::{Row, Screen, Tracker};
use crate::core::Flags;
use crate::error::PomwError;
use crate::tui::{TerminalScreen, COMMANDS_HELP};

/// How long informational messages stay on the notice row.
const INFO_FOR: StdDuration = StdDuration::from_secs(1);

/// Run the command loop until the user exits.
///
/// `focus` and `rest` are the nominal durations carried by every
/// request this loop produces.
///
/// # Errors
///
/// Returns an error if reading terminal events fails.
pub fn run<T: Tracker>(
    screen: &TerminalScreen,
    tracker: &T,
    queue: &BlockingQueue<SessionRequest>,
    flags: &Flags,
    focus: Duration,
    rest: Duration,
) -> Result<(), PomwError> {
    loop {
        let event = event::read()
            .map_err(|e| PomwError::Terminal(format!("Event read failed: {e}")))?;

        match event {
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Ok(());
                }

                match key.code {
                    KeyCode::Char('e' | 'E') | KeyCode::Esc => return Ok(()),

                    // Only valid while paused; otherwise just say so.
                    KeyCode::Char('c' | 'C') => {
                        if flags.is_paused() {
                            queue.push(SessionRequest::new(focus, rest, TimewCommand::Resume));
                        } else {
                            screen.put_for(Row::Notice, "Timer is already running", INFO_FOR);
                        }
                    }

                    KeyCode::Char('p' | 'P') => {
                        flags.pause();
                        // Best-effort: a stop failure while pausing is
                        // deliberately swallowed.
                        let _ = tracker.stop();
                    }

                    _ => {}
                }
            }

            Event::Resize(_, _) => {
                screen.refit();
                screen.put_centered(Row::Commands, COMMANDS_HELP);
            }

            _ => {}
        }
    }
}
