//! Elapsed-time accounting for activity sessions.
//!
//! Elapsed time is always re-derived from the session's start timestamp, so
//! calling it once per second never accumulates drift.

use crate::session::{ActivitySession, SessionPhase};

/// Milliseconds since the Unix epoch, as reported by the host clock.
pub type TimestampMs = i64;

/// Source of wall-clock time. The browser and the tester provide their own.
pub trait Clock {
    fn now_ms(&self) -> TimestampMs;
}

/// A clock that only moves when told to. Used by tests and scripted runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: TimestampMs,
}

impl ManualClock {
    #[must_use]
    pub const fn at(now_ms: TimestampMs) -> Self {
        Self { now_ms }
    }

    pub fn advance_secs(&mut self, secs: u32) {
        self.now_ms += i64::from(secs) * 1000;
    }

    pub fn advance_ms(&mut self, ms: i64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now_ms
    }
}

/// Whole seconds between two timestamps. A clock that went backwards counts as zero.
#[must_use]
pub fn whole_seconds_between(from_ms: TimestampMs, to_ms: TimestampMs) -> u64 {
    let diff = to_ms.saturating_sub(from_ms).max(0);
    u64::try_from(diff / 1000).unwrap_or(0)
}

/// Elapsed seconds of `session` at `now_ms`.
///
/// Frozen at the accumulated base while idle or paused; while running the
/// time since the last start is added on top.
#[must_use]
pub fn elapsed_seconds(session: &ActivitySession, now_ms: TimestampMs) -> u64 {
    match session.phase() {
        SessionPhase::Running { started_at_ms } => session
            .base_seconds()
            .saturating_add(whole_seconds_between(started_at_ms, now_ms)),
        SessionPhase::Idle | SessionPhase::Paused => session.base_seconds(),
    }
}
