use std::time::{Duration, SystemTime};

use crate::history::Race;

use super::Clock;

/// Lifecycle of a timing session.
///
/// `Ready` has no elapsed time and no laps. `Running` accumulates both.
/// `Stopped` freezes them after a committed session; starting again resumes
/// from the frozen elapsed value, while reset returns to `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopwatchPhase {
    Ready,
    Running,
    Stopped,
}

/// Stopwatch for a single timing session.
///
/// The state machine is driven by explicit commands (`start`, `stop`,
/// `reset`, `record_lap`) plus a recurring external `tick`. A tick recomputes
/// elapsed time from the absolute start reference captured by `start`, so the
/// readout cannot drift however irregularly ticks arrive. Ticks outside the
/// running phase are ignored, which makes a tick that fires after stop or
/// reset harmless.
///
/// Stopping a session with nonzero elapsed time commits an immutable [`Race`]
/// that the caller hands to the race store; the stopwatch itself holds no
/// reference to storage.
pub struct Stopwatch<C: Clock> {
    clock: C,
    phase: StopwatchPhase,
    reference: Option<SystemTime>,
    elapsed_ms: u64,
    laps: Vec<u64>,
    rider_name: String,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            phase: StopwatchPhase::Ready,
            reference: None,
            elapsed_ms: 0,
            laps: Vec::new(),
            rider_name: String::new(),
        }
    }

    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Cumulative lap checkpoints recorded so far, oldest first.
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Display label attached to races committed by this stopwatch. An empty
    /// name falls back to a generated label at commit time.
    pub fn set_rider_name(&mut self, name: impl Into<String>) {
        self.rider_name = name.into();
    }

    /// Begin (or resume) timing. Captures the start reference so that
    /// `elapsed = now - reference`; a nonzero frozen elapsed value from a
    /// previous stop shifts the reference back, continuing the session.
    /// Ignored while already running.
    pub fn start(&mut self) {
        if self.phase == StopwatchPhase::Running {
            return;
        }
        let now = self.clock.now();
        self.reference = Some(now - Duration::from_millis(self.elapsed_ms));
        self.phase = StopwatchPhase::Running;
    }

    /// Recompute elapsed time from the start reference. No-op unless running.
    pub fn tick(&mut self) {
        if self.phase != StopwatchPhase::Running {
            return;
        }
        self.elapsed_ms = self.elapsed_since_reference(self.clock.now());
    }

    /// Record the current elapsed value as a lap checkpoint. Only meaningful
    /// while running with nonzero elapsed time; otherwise a no-op.
    pub fn record_lap(&mut self) {
        if self.phase == StopwatchPhase::Running && self.elapsed_ms > 0 {
            self.laps.push(self.elapsed_ms);
        }
    }

    /// Halt timing. With nonzero elapsed time the final elapsed value is
    /// appended as an implicit last lap and a committed [`Race`] is returned
    /// for the caller to persist; with nothing on the clock the stopwatch
    /// simply returns to `Ready`.
    pub fn stop(&mut self) -> Option<Race> {
        if self.phase != StopwatchPhase::Running {
            return None;
        }
        let now = self.clock.now();
        self.elapsed_ms = self.elapsed_since_reference(now);

        if self.elapsed_ms == 0 {
            self.phase = StopwatchPhase::Ready;
            self.reference = None;
            return None;
        }

        self.phase = StopwatchPhase::Stopped;
        self.laps.push(self.elapsed_ms);

        let total = self.elapsed_ms;
        let start_time = now - Duration::from_millis(total);
        Some(Race::new(
            start_time,
            now,
            total,
            self.laps.clone(),
            self.rider_label(now),
        ))
    }

    /// Clear the session: elapsed to zero, laps emptied, phase back to
    /// `Ready`. Valid from any phase; already-committed races are unaffected.
    pub fn reset(&mut self) {
        self.phase = StopwatchPhase::Ready;
        self.reference = None;
        self.elapsed_ms = 0;
        self.laps.clear();
    }

    fn elapsed_since_reference(&self, now: SystemTime) -> u64 {
        let reference = match self.reference {
            Some(reference) => reference,
            None => return self.elapsed_ms,
        };
        now.duration_since(reference)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn rider_label(&self, end_time: SystemTime) -> String {
        let trimmed = self.rider_name.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        let millis = end_time
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("Rider {:04}", millis % 10_000)
    }
}
