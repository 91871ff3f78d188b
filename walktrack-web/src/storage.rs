//! `localStorage` backing for tracker settings.
use crate::dom;
use walktrack_core::{Effect, SettingKey, SettingsStore, persist_effects};

/// Settings store over the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSettingsStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("failed to access `{key}`: {message}")]
    Access { key: &'static str, message: String },
}

impl SettingsStore for WebSettingsStore {
    type Error = WebStorageError;

    fn read(&self, key: SettingKey) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().ok_or(WebStorageError::Unavailable)?;
        storage
            .get_item(key.storage_key())
            .map_err(|err| WebStorageError::Access {
                key: key.storage_key(),
                message: dom::js_error_message(&err),
            })
    }

    fn write(&self, key: SettingKey, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().ok_or(WebStorageError::Unavailable)?;
        storage
            .set_item(key.storage_key(), value)
            .map_err(|err| WebStorageError::Access {
                key: key.storage_key(),
                message: dom::js_error_message(&err),
            })
    }
}

/// Carry out every `Persist` effect. Failures are logged, never fatal.
pub fn persist(effects: &[Effect]) {
    if let Err(err) = persist_effects(&WebSettingsStore, effects) {
        log::warn!("failed to persist settings: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_browser_reports_unavailable() {
        let err = WebSettingsStore.read(SettingKey::Points).unwrap_err();
        assert!(matches!(err, WebStorageError::Unavailable));
        assert_eq!(err.to_string(), "localStorage unavailable");
    }
}
