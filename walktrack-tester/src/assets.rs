//! Configuration and catalog shipped with the web app, embedded at build time.
use anyhow::{Context, Result};
use walktrack_core::{Catalog, TrackerConfig};

const CONFIG_JSON: &str = include_str!("../../walktrack-web/static/data/config.json");
const CATALOG_JSON: &str = include_str!("../../walktrack-web/static/data/catalog.json");

#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub config: TrackerConfig,
    pub catalog: Catalog,
}

impl TesterAssets {
    pub fn load() -> Result<Self> {
        let config = TrackerConfig::from_json(CONFIG_JSON).context("parsing config.json")?;
        let catalog = Catalog::from_json(CATALOG_JSON).context("parsing catalog.json")?;
        Ok(Self { config, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_assets_parse() {
        let assets = TesterAssets::load().unwrap();
        assert_eq!(assets.catalog.routes.len(), 5);
        assert_eq!(assets.catalog.rewards.len(), 3);
        assert_eq!(assets.config, TrackerConfig::default_config());
    }
}
