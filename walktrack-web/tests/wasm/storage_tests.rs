use wasm_bindgen_test::*;
use walktrack_core::{PersistedSettings, SettingKey, SettingsStore, Theme};
use walktrack_web::dom;
use walktrack_web::storage::WebSettingsStore;

fn clear_settings() {
    let storage = dom::local_storage().expect("localStorage");
    for key in SettingKey::ALL {
        storage.remove_item(key.storage_key()).expect("remove setting");
    }
}

#[wasm_bindgen_test]
fn settings_round_trip_through_local_storage() {
    clear_settings();
    let store = WebSettingsStore;
    store.write(SettingKey::Points, "450").expect("write points");
    store.write(SettingKey::Theme, "light").expect("write theme");

    let settings = PersistedSettings::load(&store).expect("load settings");
    assert_eq!(settings.points, Some(450));
    assert_eq!(settings.theme, Some(Theme::Light));
    assert!(settings.username.is_none());
    clear_settings();
}

#[wasm_bindgen_test]
fn theme_class_follows_theme() {
    dom::apply_theme(Theme::Light);
    let body = dom::document().and_then(|doc| doc.body()).expect("body");
    assert!(body.class_list().contains("light-mode"));
    dom::apply_theme(Theme::Dark);
    assert!(!body.class_list().contains("light-mode"));
}
