//! Activity session state machine.
//!
//! `Idle -> Running <-> Paused -> Idle`. Finishing returns to `Idle`, so the
//! machine cycles rather than terminates. Every transition that does not
//! apply to the current phase is a silent no-op and returns `None`.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clock::{TimestampMs, elapsed_seconds};
use crate::config::{StepRange, TrackerConfig};
use crate::constants::{
    QUICK_SESSION_TAG, QUICK_SESSION_TITLE, SUMMARY_MIN_DISTANCE_KM, SUMMARY_MIN_MINUTES,
};
use crate::format::format_km;
use crate::numbers::{round_f64_to_u32, round_to_tenths, u64_to_f64};

/// Coarse session status, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Session phase. The start timestamp only exists while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionPhase {
    #[default]
    Idle,
    Running {
        started_at_ms: TimestampMs,
    },
    Paused,
}

impl SessionPhase {
    #[must_use]
    pub const fn status(self) -> SessionStatus {
        match self {
            Self::Idle => SessionStatus::Idle,
            Self::Running { .. } => SessionStatus::Running,
            Self::Paused => SessionStatus::Paused,
        }
    }
}

/// Identifies the ticker installed by the most recent `start`.
///
/// Ticks stamped with an older generation belong to a cancelled ticker and
/// are discarded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TickGeneration(u64);

impl TickGeneration {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Derived record of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub title: String,
    pub tag: String,
    pub distance_km: f64,
    pub minutes: u32,
}

impl ActivitySummary {
    /// Compute the summary for a session of `elapsed_secs` seconds and `steps` steps.
    ///
    /// Minutes round to the nearest whole minute and never drop below one;
    /// distance rounds to one decimal and never drops below 0.2 km.
    #[must_use]
    pub fn from_totals(elapsed_secs: u64, steps: u32, cfg: &TrackerConfig) -> Self {
        let minutes = round_f64_to_u32(u64_to_f64(elapsed_secs) / 60.0).max(SUMMARY_MIN_MINUTES);
        let distance_km =
            round_to_tenths(f64::from(steps) / cfg.steps_per_km).max(SUMMARY_MIN_DISTANCE_KM);
        Self {
            title: QUICK_SESSION_TITLE.to_string(),
            tag: QUICK_SESSION_TAG.to_string(),
            distance_km,
            minutes,
        }
    }

    /// One-line description such as `1.2 km · 14 min`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{} km · {} min", format_km(self.distance_km), self.minutes)
    }
}

/// Everything `finish` hands back to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedSession {
    pub summary: ActivitySummary,
    pub elapsed_seconds: u64,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivitySession {
    phase: SessionPhase,
    base_seconds: u64,
    steps: u32,
    generation: TickGeneration,
}

impl ActivitySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.phase.status()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, SessionPhase::Running { .. })
    }

    #[must_use]
    pub const fn started_at_ms(&self) -> Option<TimestampMs> {
        match self.phase {
            SessionPhase::Running { started_at_ms } => Some(started_at_ms),
            SessionPhase::Idle | SessionPhase::Paused => None,
        }
    }

    #[must_use]
    pub const fn base_seconds(&self) -> u64 {
        self.base_seconds
    }

    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub const fn generation(&self) -> TickGeneration {
        self.generation
    }

    /// Start a fresh session from idle, or resume a paused one.
    ///
    /// Returns the generation of the ticker the caller must install, after
    /// cancelling any ticker it already runs.
    pub fn start(&mut self, now_ms: TimestampMs) -> Option<TickGeneration> {
        match self.phase {
            SessionPhase::Running { .. } => return None,
            SessionPhase::Idle => {
                self.base_seconds = 0;
                self.steps = 0;
            }
            SessionPhase::Paused => {}
        }
        self.phase = SessionPhase::Running {
            started_at_ms: now_ms,
        };
        self.generation = self.generation.next();
        log::debug!(
            "session running (generation {}, base {}s)",
            self.generation.value(),
            self.base_seconds
        );
        Some(self.generation)
    }

    /// Freeze elapsed time. Returns the frozen elapsed seconds.
    pub fn pause(&mut self, now_ms: TimestampMs) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        self.base_seconds = elapsed_seconds(self, now_ms);
        self.phase = SessionPhase::Paused;
        log::debug!("session paused at {}s", self.base_seconds);
        Some(self.base_seconds)
    }

    /// Close the session, reset to idle and return its summary.
    pub fn finish(&mut self, now_ms: TimestampMs, cfg: &TrackerConfig) -> Option<FinishedSession> {
        if self.phase == SessionPhase::Idle {
            return None;
        }
        let elapsed = elapsed_seconds(self, now_ms);
        let steps = self.steps;
        let summary = ActivitySummary::from_totals(elapsed, steps, cfg);
        self.phase = SessionPhase::Idle;
        self.base_seconds = 0;
        self.steps = 0;
        log::debug!(
            "session finished: {elapsed}s, {steps} steps, {}",
            summary.summary_line()
        );
        Some(FinishedSession {
            summary,
            elapsed_seconds: elapsed,
            steps,
        })
    }

    /// Apply one ticker firing. Ignored unless running and `generation` is current.
    ///
    /// Returns the number of steps added.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        generation: TickGeneration,
        rng: &mut R,
        range: StepRange,
    ) -> Option<u32> {
        if !self.is_running() || generation != self.generation {
            log::trace!(
                "dropping tick from generation {} (current {})",
                generation.value(),
                self.generation.value()
            );
            return None;
        }
        let increment = rng.gen_range(range.min..=range.max);
        self.steps = self.steps.saturating_add(increment);
        Some(increment)
    }
}
