//! Walktrack Core
//!
//! Platform-agnostic logic for the Walktrack walking tracker page: the
//! activity session state machine, the points ledger, the route filter and
//! the controller that ties them together. This crate has no browser
//! dependencies; commands return side-effect intents instead of touching
//! storage, timers or the DOM.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod effects;
pub mod format;
pub mod history;
pub mod ledger;
pub mod numbers;
pub mod prefs;
pub mod profile;
pub mod routes;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, TimestampMs, elapsed_seconds};
pub use config::{Catalog, ConfigError, Reward, StepRange, TrackerConfig};
pub use controller::{SessionControls, Tracker, status_label_key};
pub use effects::{Effect, Effects, Notice};
pub use format::{format_grouped, format_hms, format_km};
pub use history::{ActivityEntry, ActivityHistory};
pub use ledger::{LedgerError, PointsLedger};
pub use prefs::{Screen, Theme};
pub use profile::{Profile, ProfileError, ProfileName, initials, is_valid_name, sanitize_name};
pub use routes::{FilterChip, Route, RouteFilter, RouteKind};
pub use session::{
    ActivitySession, ActivitySummary, FinishedSession, SessionPhase, SessionStatus,
    TickGeneration,
};
pub use storage::{MemoryStore, PersistedSettings, SettingKey, SettingsStore, persist_effects};

/// Load persisted settings and build a tracker in one step.
///
/// # Errors
///
/// Returns the store's error if the settings cannot be read.
pub fn boot_tracker<S: SettingsStore + ?Sized>(
    config: TrackerConfig,
    catalog: Catalog,
    store: &S,
    system_prefers_light: bool,
) -> Result<Tracker, S::Error> {
    let settings = PersistedSettings::load(store)?;
    Ok(Tracker::new(config, catalog, settings, system_prefers_light))
}
