//! Tracker configuration and the static catalogs shown on the page.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DISPLAY_NAME, DEFAULT_MAX_DISTANCE_KM, DEFAULT_POINTS, PREMIUM_BONUS_POINTS,
    STARTING_LIFETIME_STEPS, STEP_INCREMENT_MAX, STEP_INCREMENT_MIN, STEPS_PER_KM,
    TICK_INTERVAL_MS, TOAST_DURATION_MS, TOAST_FADE_MS,
};
use crate::history::ActivityEntry;
use crate::routes::Route;

/// Errors raised when embedded configuration cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("step increment range invalid (min {min} > max {max})")]
    StepRange { min: u32, max: u32 },
    #[error("steps per km must be positive (got {0})")]
    StepsPerKm(f64),
    #[error("duplicate {kind} id `{id}` in catalog")]
    DuplicateId { kind: &'static str, id: String },
}

/// Inclusive range of synthetic steps added on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    pub min: u32,
    pub max: u32,
}

impl Default for StepRange {
    fn default() -> Self {
        Self {
            min: STEP_INCREMENT_MIN,
            max: STEP_INCREMENT_MAX,
        }
    }
}

/// Tunable values for the tracker. Every field falls back to its default
/// when missing from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "TrackerConfig::default_points")]
    pub default_points: u32,
    #[serde(default = "TrackerConfig::default_premium_bonus")]
    pub premium_bonus: u32,
    #[serde(default = "TrackerConfig::default_starting_steps")]
    pub starting_lifetime_steps: u64,
    #[serde(default = "TrackerConfig::default_steps_per_km")]
    pub steps_per_km: f64,
    #[serde(default)]
    pub step_increment: StepRange,
    #[serde(default = "TrackerConfig::default_max_distance")]
    pub default_max_distance_km: f64,
    #[serde(default = "TrackerConfig::default_tick_interval")]
    pub tick_interval_ms: u32,
    #[serde(default = "TrackerConfig::default_toast_duration")]
    pub toast_duration_ms: u32,
    #[serde(default = "TrackerConfig::default_toast_fade")]
    pub toast_fade_ms: u32,
    #[serde(default = "TrackerConfig::default_display_name")]
    pub default_display_name: String,
}

impl TrackerConfig {
    const fn default_points() -> u32 {
        DEFAULT_POINTS
    }

    const fn default_premium_bonus() -> u32 {
        PREMIUM_BONUS_POINTS
    }

    const fn default_starting_steps() -> u64 {
        STARTING_LIFETIME_STEPS
    }

    const fn default_steps_per_km() -> f64 {
        STEPS_PER_KM
    }

    const fn default_max_distance() -> f64 {
        DEFAULT_MAX_DISTANCE_KM
    }

    const fn default_tick_interval() -> u32 {
        TICK_INTERVAL_MS
    }

    const fn default_toast_duration() -> u32 {
        TOAST_DURATION_MS
    }

    const fn default_toast_fade() -> u32 {
        TOAST_FADE_MS
    }

    fn default_display_name() -> String {
        DEFAULT_DISPLAY_NAME.to_string()
    }

    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse and validate configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_increment.min > self.step_increment.max {
            return Err(ConfigError::StepRange {
                min: self.step_increment.min,
                max: self.step_increment.max,
            });
        }
        if !(self.steps_per_km.is_finite() && self.steps_per_km > 0.0) {
            return Err(ConfigError::StepsPerKm(self.steps_per_km));
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_points: Self::default_points(),
            premium_bonus: Self::default_premium_bonus(),
            starting_lifetime_steps: Self::default_starting_steps(),
            steps_per_km: Self::default_steps_per_km(),
            step_increment: StepRange::default(),
            default_max_distance_km: Self::default_max_distance(),
            tick_interval_ms: Self::default_tick_interval(),
            toast_duration_ms: Self::default_toast_duration(),
            toast_fade_ms: Self::default_toast_fade(),
            default_display_name: Self::default_display_name(),
        }
    }
}

/// A reward that can be redeemed with points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    pub cost: u32,
}

/// Routes, rewards and seeded activity history rendered by the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON and reject duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an id repeats.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_json::from_str(json)?;
        if let Some(id) = first_duplicate(catalog.routes.iter().map(|r| r.id.as_str())) {
            return Err(ConfigError::DuplicateId { kind: "route", id });
        }
        if let Some(id) = first_duplicate(catalog.rewards.iter().map(|r| r.id.as_str())) {
            return Err(ConfigError::DuplicateId { kind: "reward", id });
        }
        Ok(catalog)
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Some(id.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = TrackerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, TrackerConfig::default_config());
        assert_eq!(cfg.premium_bonus, 150);
        assert_eq!(cfg.step_increment, StepRange { min: 3, max: 9 });
    }

    #[test]
    fn inverted_step_range_is_rejected() {
        let err = TrackerConfig::from_json(r#"{"step_increment":{"min":9,"max":3}}"#)
            .expect_err("range should be rejected");
        assert!(matches!(err, ConfigError::StepRange { min: 9, max: 3 }));
    }

    #[test]
    fn zero_steps_per_km_is_rejected() {
        let err = TrackerConfig::from_json(r#"{"steps_per_km":0.0}"#).unwrap_err();
        assert!(err.to_string().contains("steps per km"));
    }

    #[test]
    fn catalog_rejects_duplicate_rewards() {
        let json = r#"{"rewards":[
            {"id":"coffee","title":"Café","cost":300},
            {"id":"coffee","title":"Café doble","cost":500}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { kind: "reward", .. }));
    }

    #[test]
    fn catalog_sections_default_to_empty() {
        let json = r#"{"rewards":[{"id":"socks","title":"Calcetines","cost":800}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.rewards.len(), 1);
        assert_eq!(catalog.rewards[0].cost, 800);
        assert!(catalog.routes.is_empty());
    }
}
