//! Centralized tuning constants for Walktrack core logic.
//!
//! These values back the defaults of [`crate::config::TrackerConfig`] and the
//! storage keys shared with the browser page.

// Storage keys -------------------------------------------------------------
pub(crate) const KEY_POINTS: &str = "wt-points";
pub(crate) const KEY_USERNAME: &str = "wt-username";
pub(crate) const KEY_PREMIUM: &str = "wt-premium";
pub(crate) const KEY_THEME: &str = "wt-theme";

// Session tuning -----------------------------------------------------------
pub(crate) const STEPS_PER_KM: f64 = 1300.0;
pub(crate) const STEP_INCREMENT_MIN: u32 = 3;
pub(crate) const STEP_INCREMENT_MAX: u32 = 9;
pub(crate) const SUMMARY_MIN_DISTANCE_KM: f64 = 0.2;
pub(crate) const SUMMARY_MIN_MINUTES: u32 = 1;
pub(crate) const TICK_INTERVAL_MS: u32 = 1000;
pub(crate) const QUICK_SESSION_TITLE: &str = "Sesión rápida";
pub(crate) const QUICK_SESSION_TAG: &str = "Caminar";

// Points -------------------------------------------------------------------
pub(crate) const DEFAULT_POINTS: u32 = 1250;
pub(crate) const PREMIUM_BONUS_POINTS: u32 = 150;

// Page defaults ------------------------------------------------------------
pub(crate) const STARTING_LIFETIME_STEPS: u64 = 8432;
pub(crate) const DEFAULT_MAX_DISTANCE_KM: f64 = 15.0;
pub(crate) const DEFAULT_DISPLAY_NAME: &str = "Tu nombre";
pub(crate) const FALLBACK_INITIALS: &str = "WT";
pub(crate) const MIN_NAME_CHARS: usize = 2;

// Notifications ------------------------------------------------------------
pub(crate) const TOAST_DURATION_MS: u32 = 3200;
pub(crate) const TOAST_FADE_MS: u32 = 180;
