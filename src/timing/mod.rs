// Session timing: the stopwatch state machine and its clock seam

pub(crate) mod stopwatch;

use std::time::SystemTime;

pub use stopwatch::{Stopwatch, StopwatchPhase};

/// Cadence at which the presentation layer feeds ticks to the stopwatch
/// while it is running. The displayed elapsed value is never more than one
/// interval behind true wall-clock elapsed time.
pub const SAMPLE_INTERVAL_MS: u64 = 10;

/// Source of wall-clock time for the stopwatch. Elapsed time is always
/// recomputed against an absolute reference taken from this clock, never by
/// accumulating per-tick deltas, so scheduling jitter does not drift the
/// readout.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Format a millisecond duration as `MM:SS.cc` for display.
pub fn format_elapsed(milliseconds: u64) -> String {
    let minutes = milliseconds / 60_000;
    let seconds = (milliseconds % 60_000) / 1_000;
    let centis = (milliseconds % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(5_000), "00:05.00");
        assert_eq!(format_elapsed(83_456), "01:23.45");
        assert_eq!(format_elapsed(659_990), "10:59.99");
        assert_eq!(format_elapsed(3_600_000), "60:00.00");
    }
}
