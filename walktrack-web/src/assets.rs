//! Embedded tuning config and route/reward catalog.
use walktrack_core::{Catalog, TrackerConfig};

const CONFIG_JSON: &str = include_str!("../static/data/config.json");
const CATALOG_JSON: &str = include_str!("../static/data/catalog.json");

/// Parse the embedded config, falling back to built-in defaults.
#[must_use]
pub fn load_config() -> TrackerConfig {
    TrackerConfig::from_json(CONFIG_JSON).unwrap_or_else(|err| {
        log::error!("invalid tracker config, using defaults: {err}");
        TrackerConfig::default_config()
    })
}

/// Parse the embedded catalog, falling back to an empty one.
#[must_use]
pub fn load_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).unwrap_or_else(|err| {
        log::error!("invalid catalog, showing no routes or rewards: {err}");
        Catalog::empty()
    })
}
