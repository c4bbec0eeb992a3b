//! Drift-corrected interruptible countdown.
//!
//! The per-tick sleep is the only suspension point in the scheduler
//! core. Each tick sleeps slightly less than a full tick to absorb the
//! previous tick's overshoot, and the remaining time is decremented by
//! the wall-clock time actually spent, so the countdown stays accurate
//! under imprecise sleeps.

use std::thread;
use std::time::{Duration as StdDuration, Instant};

use chrono::Duration;

use crate::core::datetime::format_countdown;
use crate::core::flags::Flags;
use crate::core::traits::{Row, Screen};

/// Nominal tick length.
pub const TICK: StdDuration = StdDuration::from_secs(1);

/// Count `duration` down to zero, one tick at a time.
///
/// Renders the phase title, remaining time, and task description every
/// tick, and re-reads the shared flags every tick, so pause and
/// shutdown are observed with at most one tick of latency.
///
/// Returns `true` when the countdown expired naturally while still
/// running and unpaused, `false` when it was interrupted. Callers must
/// treat `false` as "abort the current session now". A duration that is
/// already zero or negative performs no ticks and reports the flag
/// state as read on entry.
pub fn run<S: Screen>(
    screen: &S,
    title: &str,
    task: &str,
    duration: Duration,
    tick: StdDuration,
    flags: &Flags,
) -> bool {
    let tick = Duration::from_std(tick).unwrap_or_else(|_| Duration::seconds(1));
    let mut remaining = duration;
    let mut carry = Duration::zero();
    let mut prev = Instant::now();

    let mut running = flags.is_running();
    let mut paused = flags.is_paused();
    while running && !paused && remaining > Duration::zero() {
        screen.put_centered(Row::Title, title);
        screen.put_centered(Row::Remaining, &format_countdown(remaining));
        screen.put_centered(Row::Task, task);

        let sleep_time = tick - carry;
        thread::sleep(sleep_time.to_std().unwrap_or_default());

        let now = Instant::now();
        // Wall time actually spent, which may exceed the requested
        // sleep under scheduler jitter.
        let slept = Duration::from_std(now - prev).unwrap_or(tick);
        carry = overshoot_mod_tick(slept - sleep_time, tick);
        remaining = remaining - slept;
        prev = now;

        running = flags.is_running();
        paused = flags.is_paused();
    }

    running && !paused
}

/// Overshoot folded into `[0, tick)` (sign follows the dividend, as
/// with integer remainder). Keeps cumulative drift below one tick.
fn overshoot_mod_tick(overshoot: Duration, tick: Duration) -> Duration {
    let tick_nanos = tick.num_nanoseconds().unwrap_or(1_000_000_000).max(1);
    let nanos = overshoot.num_nanoseconds().unwrap_or(0) % tick_nanos;
    Duration::nanoseconds(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingScreen;
    use std::sync::Arc;

    const TEST_TICK: StdDuration = StdDuration::from_millis(20);

    #[test]
    fn test_expires_within_tolerance() {
        let flags = Flags::new();
        flags.unpause();
        let screen = RecordingScreen::new();

        let started = Instant::now();
        let finished = run(
            &screen,
            "Focus!",
            "task",
            Duration::milliseconds(100),
            TEST_TICK,
            &flags,
        );
        let elapsed = started.elapsed();

        assert!(finished);
        assert!(elapsed >= StdDuration::from_millis(80), "too fast: {elapsed:?}");
        assert!(elapsed <= StdDuration::from_millis(600), "too slow: {elapsed:?}");
    }

    #[test]
    fn test_renders_every_tick() {
        let flags = Flags::new();
        flags.unpause();
        let screen = RecordingScreen::new();

        run(
            &screen,
            "Focus!",
            "deep work",
            Duration::milliseconds(60),
            TEST_TICK,
            &flags,
        );

        let titles = screen.puts_on(Row::Title);
        assert!(!titles.is_empty());
        assert!(titles.iter().all(|t| t == "Focus!"));
        assert_eq!(screen.puts_on(Row::Task).first().map(String::as_str), Some("deep work"));
    }

    #[test]
    fn test_pause_interrupts_within_a_tick() {
        let flags = Arc::new(Flags::new());
        flags.unpause();
        let screen = RecordingScreen::new();

        let pauser = {
            let flags = Arc::clone(&flags);
            std::thread::spawn(move || {
                std::thread::sleep(StdDuration::from_millis(50));
                flags.pause();
            })
        };

        let started = Instant::now();
        let finished = run(
            &screen,
            "Focus!",
            "task",
            Duration::seconds(10),
            TEST_TICK,
            &flags,
        );
        let elapsed = started.elapsed();
        pauser.join().unwrap();

        assert!(!finished);
        assert!(elapsed < StdDuration::from_secs(1), "pause not observed: {elapsed:?}");
    }

    #[test]
    fn test_shutdown_interrupts() {
        let flags = Flags::new();
        flags.unpause();
        flags.shut_down();
        let screen = RecordingScreen::new();

        assert!(!run(
            &screen,
            "Focus!",
            "task",
            Duration::seconds(10),
            TEST_TICK,
            &flags,
        ));
    }

    #[test]
    fn test_zero_duration_runs_zero_ticks() {
        let flags = Flags::new();
        flags.unpause();
        let screen = RecordingScreen::new();

        assert!(run(&screen, "Focus!", "task", Duration::zero(), TEST_TICK, &flags));
        assert!(screen.events().is_empty());
    }

    #[test]
    fn test_zero_duration_while_paused_reports_interrupted() {
        let flags = Flags::new();
        let screen = RecordingScreen::new();

        assert!(!run(&screen, "Focus!", "task", Duration::zero(), TEST_TICK, &flags));
    }

    #[test]
    fn test_overshoot_mod_tick_bounds() {
        let tick = Duration::seconds(1);
        assert_eq!(
            overshoot_mod_tick(Duration::milliseconds(1300), tick),
            Duration::milliseconds(300)
        );
        assert_eq!(overshoot_mod_tick(Duration::zero(), tick), Duration::zero());
        assert_eq!(
            overshoot_mod_tick(Duration::milliseconds(7), tick),
            Duration::milliseconds(7)
        );
    }
}
