//! The background session worker.
//!
//! One long-lived thread that blocks on the session queue and drives
//! one session at a time: resolve against Timewarrior, focus countdown,
//! stop tracking plus cue, break countdown, cue. An interrupted
//! countdown abandons the rest of the session; the next queued request
//! simply supersedes it. Nothing here retries.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::core::countdown;
use crate::core::flags::Flags;
use crate::core::queue::BlockingQueue;
use crate::core::request::{SessionRequest, TimewCommand};
use crate::core::traits::{Chime, Cue, Row, Screen, Tracker};
use crate::error::PomwError;
use crate::timew::format_description;
use crate::tui::COMMANDS_HELP;

/// How long error messages stay on the notice row.
const NOTICE_FOR: StdDuration = StdDuration::from_secs(2);

/// The session worker. Sole consumer of the session queue.
pub struct Worker<T, S, C> {
    queue: Arc<BlockingQueue<SessionRequest>>,
    flags: Arc<Flags>,
    tracker: T,
    screen: S,
    chime: C,
    tick: StdDuration,
}

impl<T: Tracker, S: Screen, C: Chime> Worker<T, S, C> {
    /// Build a worker with the nominal one-second tick.
    pub fn new(
        queue: Arc<BlockingQueue<SessionRequest>>,
        flags: Arc<Flags>,
        tracker: T,
        screen: S,
        chime: C,
    ) -> Self {
        Self {
            queue,
            flags,
            tracker,
            screen,
            chime,
            tick: countdown::TICK,
        }
    }

    /// Override the countdown tick. Used by fast tests.
    #[must_use]
    pub fn with_tick(mut self, tick: StdDuration) -> Self {
        self.tick = tick;
        self
    }

    /// Consume requests until shutdown.
    ///
    /// The shutdown sentinel is what lets this loop observe
    /// `running = false` while blocked on the queue; without it the
    /// worker would wait forever.
    pub fn run(&self) {
        while self.flags.is_running() {
            let request = self.queue.wait_pop();
            if request.is_shutdown() {
                break;
            }
            self.run_session(&request);
        }
    }

    /// Drive a single session to completion or interruption.
    fn run_session(&self, request: &SessionRequest) {
        self.flags.unpause();
        self.screen.clear();
        self.screen.put_centered(Row::Commands, COMMANDS_HELP);

        let (focus, task) = match self.resolve(request) {
            Ok(resolved) => resolved,
            Err(err) => {
                // Resolution failure drops the request entirely.
                self.screen.put_for(Row::Notice, &err.to_string(), NOTICE_FOR);
                self.flags.pause();
                return;
            }
        };

        if !countdown::run(&self.screen, "Focus!", &task, focus, self.tick, &self.flags) {
            return;
        }

        // A failure here is only warned about; the break still runs.
        if let Err(err) = self
            .chime
            .play(Cue::FocusEnd)
            .and_then(|()| self.tracker.stop())
        {
            self.screen.put_for(Row::Notice, &err.to_string(), NOTICE_FOR);
        }

        if !countdown::run(
            &self.screen,
            "Break",
            &task,
            request.rest,
            self.tick,
            &self.flags,
        ) {
            return;
        }

        self.flags.pause();
        let _ = self.chime.play(Cue::BreakEnd);
    }

    /// Resolve the effective focus duration and task description.
    ///
    /// For `Resume` with active tracking, already-tracked time is
    /// credited against the nominal focus duration, clamped at zero;
    /// with no active tracking, tracking is restarted and the
    /// description adopted from the command output.
    fn resolve(&self, request: &SessionRequest) -> Result<(Duration, String), PomwError> {
        let snapshot = self.tracker.query()?;
        let mut focus = request.focus;
        let mut task = snapshot.task_description;

        if request.command == TimewCommand::Resume {
            if snapshot.is_tracking {
                focus = if snapshot.tracked > request.focus {
                    Duration::zero()
                } else {
                    request.focus - snapshot.tracked
                };
            } else {
                task = format_description(&self.tracker.resume()?);
            }
        }

        Ok((focus, task))
    }
}
