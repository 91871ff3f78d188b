use crate::app::state::AppState;
use crate::assets::{load_catalog, load_config};
use crate::dom;
use crate::storage::{self, WebSettingsStore};
use walktrack_core::{PersistedSettings, Tracker, boot_tracker};
use yew::prelude::*;

/// Build the tracker from the embedded assets and whatever `localStorage`
/// holds. Without storage the page still starts, with default settings.
#[must_use]
pub fn boot_tracker_from_browser() -> Tracker {
    let prefers_light = dom::system_prefers_light();
    boot_tracker(load_config(), load_catalog(), &WebSettingsStore, prefers_light).unwrap_or_else(
        |err| {
            log::warn!("starting without saved settings: {err}");
            Tracker::new(
                load_config(),
                load_catalog(),
                PersistedSettings::default(),
                prefers_light,
            )
        },
    )
}

/// Write the resolved theme and balance back once the page has mounted.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let tracker = app_state.tracker.clone();
    use_effect_with((), move |()| {
        let effects = tracker.borrow().boot_effects();
        storage::persist(&effects);
    });
}
