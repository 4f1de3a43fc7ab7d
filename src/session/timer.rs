//! Elapsed-time tracking with explicit instants.
//!
//! The timer never reads the clock itself; every operation takes the
//! caller's `Instant`. The presentation layer feeds it the current instant
//! on a once-per-second tick, which only recomputes the displayed value
//! and never mutates anything else.

use std::time::{Duration, Instant};

/// Wall-clock elapsed time for one game.
///
/// Started when the game begins, frozen when the final round is confirmed,
/// restarted from zero on "play again".
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl Timer {
    /// A timer that has never been started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer at `now`, discarding any frozen value.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.frozen = None;
    }

    /// Freeze the timer at its elapsed value as of `now`.
    ///
    /// Subsequent `elapsed` calls return the frozen value regardless of the
    /// instant passed in.
    pub fn freeze(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.frozen = Some(now.saturating_duration_since(started));
        }
    }

    /// Return to the never-started state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the timer is currently running (started and not frozen).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Elapsed time as of `now`: zero before the first start, live while
    /// running, constant once frozen.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        self.started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstarted_reads_zero() {
        let timer = Timer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_running_elapsed() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0);

        assert!(timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(5)), Duration::from_secs(5));
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(90)), Duration::from_secs(90));
    }

    #[test]
    fn test_freeze_holds_value() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0);
        timer.freeze(t0 + Duration::from_secs(30));

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(99)), Duration::from_secs(30));
    }

    #[test]
    fn test_restart_discards_frozen() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0);
        timer.freeze(t0 + Duration::from_secs(30));

        let t1 = t0 + Duration::from_secs(100);
        timer.start(t1);
        assert_eq!(timer.elapsed(t1 + Duration::from_secs(2)), Duration::from_secs(2));
    }

    #[test]
    fn test_reset() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0);
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(10)), Duration::ZERO);
    }
}
