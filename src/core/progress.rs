//! Upload progress reporting.
//!
//! The shipped source is synthetic: a fixed-increment animation played after
//! the upload request has already succeeded, for perceived responsiveness
//! only. It sits behind [`ProgressSource`] so a source fed by real transfer
//! events can replace it without touching the upload flow.

use std::time::Instant;

/// Milliseconds between increments.
const STEP_MS: u64 = 100;
/// Percent added per increment.
const STEP_PCT: u8 = 10;
/// Hold at 100% before reporting done, in milliseconds.
const HOLD_MS: u64 = 500;
/// Time to rise from 0 to 100.
const RISE_MS: u64 = (100 / STEP_PCT as u64) * STEP_MS;

/// One progress observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Progress in percent, 0 to 100.
    pub percent: u8,
    /// True once the flow may move on from the progress display.
    pub done: bool,
}

/// Source of upload progress observations, polled on the UI tick.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSource {
    fn poll(&mut self, now: Instant) -> ProgressUpdate;
}

/// Time-driven fake progress: +10% every 100ms to 100%, then a 500ms hold.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticProgress {
    started: Instant,
}

impl SyntheticProgress {
    /// Start the animation clock at `now`.
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }
}

impl ProgressSource for SyntheticProgress {
    fn poll(&mut self, now: Instant) -> ProgressUpdate {
        let elapsed_ms = now.saturating_duration_since(self.started).as_millis() as u64;
        let steps = elapsed_ms / STEP_MS;
        let percent = (steps * STEP_PCT as u64).min(100) as u8;
        let done = elapsed_ms >= RISE_MS + HOLD_MS;
        ProgressUpdate { percent, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(source: &mut SyntheticProgress, start: Instant, ms: u64) -> ProgressUpdate {
        source.poll(start + Duration::from_millis(ms))
    }

    #[test]
    fn test_starts_at_zero() {
        let start = Instant::now();
        let mut source = SyntheticProgress::start(start);
        let update = source.poll(start);
        assert_eq!(update.percent, 0);
        assert!(!update.done);
    }

    #[test]
    fn test_increments_ten_percent_per_step() {
        let start = Instant::now();
        let mut source = SyntheticProgress::start(start);
        assert_eq!(at(&mut source, start, 99).percent, 0);
        assert_eq!(at(&mut source, start, 100).percent, 10);
        assert_eq!(at(&mut source, start, 350).percent, 30);
        assert_eq!(at(&mut source, start, 999).percent, 90);
    }

    #[test]
    fn test_caps_at_one_hundred() {
        let start = Instant::now();
        let mut source = SyntheticProgress::start(start);
        assert_eq!(at(&mut source, start, 1000).percent, 100);
        assert_eq!(at(&mut source, start, 1400).percent, 100);
        assert_eq!(at(&mut source, start, 60_000).percent, 100);
    }

    #[test]
    fn test_holds_before_done() {
        let start = Instant::now();
        let mut source = SyntheticProgress::start(start);
        // At 100% but still inside the hold window
        assert!(!at(&mut source, start, 1000).done);
        assert!(!at(&mut source, start, 1499).done);
        assert!(at(&mut source, start, 1500).done);
        assert!(at(&mut source, start, 2000).done);
    }

    #[test]
    fn test_percent_is_monotonic() {
        let start = Instant::now();
        let mut source = SyntheticProgress::start(start);
        let mut last = 0;
        for ms in (0..2000).step_by(37) {
            let percent = at(&mut source, start, ms).percent;
            assert!(percent >= last, "regressed at {ms}ms");
            last = percent;
        }
    }

    #[test]
    fn test_clock_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut source = SyntheticProgress::start(start);
        let update = source.poll(Instant::now());
        assert_eq!(update.percent, 0);
        assert!(!update.done);
    }
}
