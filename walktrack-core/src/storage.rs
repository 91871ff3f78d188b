//! Flat key-value settings and the store abstraction behind them.
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::constants::{KEY_POINTS, KEY_PREMIUM, KEY_THEME, KEY_USERNAME};
use crate::effects::Effect;
use crate::prefs::Theme;
use crate::profile::ProfileName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKey {
    Points,
    Username,
    Premium,
    Theme,
}

impl SettingKey {
    pub const ALL: [Self; 4] = [Self::Points, Self::Username, Self::Premium, Self::Theme];

    /// Key used in browser storage.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Points => KEY_POINTS,
            Self::Username => KEY_USERNAME,
            Self::Premium => KEY_PREMIUM,
            Self::Theme => KEY_THEME,
        }
    }
}

/// Trait for abstracting settings persistence.
/// Platform-specific implementations should provide this.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a setting, `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: SettingKey) -> Result<Option<String>, Self::Error>;

    /// Write a setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: SettingKey, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<SettingKey, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (SettingKey, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.to_string())),
        );
        store
    }

    #[must_use]
    pub fn get(&self, key: SettingKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }
}

impl SettingsStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, key: SettingKey) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: SettingKey, value: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().insert(key, value.to_string());
        Ok(())
    }
}

/// Settings as read back at startup. Unusable values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub points: Option<u32>,
    pub username: Option<ProfileName>,
    pub premium: bool,
    pub theme: Option<Theme>,
}

impl PersistedSettings {
    /// Load every setting from `store`.
    ///
    /// # Errors
    ///
    /// Returns the store's error if any read fails.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Result<Self, S::Error> {
        Ok(Self::from_raw(
            store.read(SettingKey::Points)?.as_deref(),
            store.read(SettingKey::Username)?.as_deref(),
            store.read(SettingKey::Premium)?.as_deref(),
            store.read(SettingKey::Theme)?.as_deref(),
        ))
    }

    /// Interpret raw stored strings.
    #[must_use]
    pub fn from_raw(
        points: Option<&str>,
        username: Option<&str>,
        premium: Option<&str>,
        theme: Option<&str>,
    ) -> Self {
        let points = points.and_then(|raw| {
            let parsed = raw.trim().parse::<u32>().ok();
            if parsed.is_none() {
                log::warn!("ignoring stored points balance `{raw}`");
            }
            parsed
        });
        let username = username.and_then(|raw| ProfileName::validated(raw).ok());
        Self {
            points,
            username,
            premium: premium == Some("true"),
            // Any stored value other than "light" selects the dark theme.
            theme: theme
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.parse().unwrap_or(Theme::Dark)),
        }
    }
}

/// Write every `Persist` effect to `store`, in order.
///
/// # Errors
///
/// Stops at and returns the first failed write.
pub fn persist_effects<'a, S: SettingsStore + ?Sized>(
    store: &S,
    effects: impl IntoIterator<Item = &'a Effect>,
) -> Result<usize, S::Error> {
    let mut written = 0;
    for effect in effects {
        if let Effect::Persist { key, value } = effect {
            store.write(*key, value)?;
            written += 1;
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_page_keys() {
        let keys: Vec<_> = SettingKey::ALL.iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys, ["wt-points", "wt-username", "wt-premium", "wt-theme"]);
    }

    #[test]
    fn load_reads_valid_values() {
        let store = MemoryStore::with_entries([
            (SettingKey::Points, "420"),
            (SettingKey::Username, " Marta "),
            (SettingKey::Premium, "true"),
            (SettingKey::Theme, "light"),
        ]);
        let settings = PersistedSettings::load(&store).unwrap();
        assert_eq!(settings.points, Some(420));
        assert_eq!(settings.username.unwrap().as_str(), "Marta");
        assert!(settings.premium);
        assert_eq!(settings.theme, Some(Theme::Light));
    }

    #[test]
    fn unusable_values_are_dropped() {
        let settings = PersistedSettings::from_raw(Some("lots"), Some("x"), Some("yes"), None);
        assert_eq!(settings, PersistedSettings::default());
    }

    #[test]
    fn unknown_stored_theme_reads_as_dark() {
        let theme = |raw: Option<&str>| PersistedSettings::from_raw(None, None, None, raw).theme;
        assert_eq!(theme(Some("blue")), Some(Theme::Dark));
        assert_eq!(theme(Some("dark")), Some(Theme::Dark));
        assert_eq!(theme(Some("light")), Some(Theme::Light));
        assert_eq!(theme(Some("")), None);
        assert_eq!(theme(None), None);
    }

    #[test]
    fn empty_store_loads_defaults() {
        let settings = PersistedSettings::load(&MemoryStore::new()).unwrap();
        assert_eq!(settings, PersistedSettings::default());
    }

    #[test]
    fn persist_effects_skips_other_effects() {
        let store = MemoryStore::new();
        let effects = [
            Effect::StopTicker,
            Effect::persist(SettingKey::Points, "10"),
            Effect::persist(SettingKey::Points, "20"),
        ];
        let written = persist_effects(&store, &effects).unwrap();
        assert_eq!(written, 2);
        assert_eq!(store.get(SettingKey::Points).as_deref(), Some("20"));
    }
}
