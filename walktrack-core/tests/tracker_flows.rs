use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use walktrack_core::{
    Catalog, Effect, MemoryStore, Notice, Screen, SettingKey, SettingsStore, TrackerConfig,
    boot_tracker, persist_effects,
};

fn catalog() -> Catalog {
    Catalog::from_json(include_str!("../../walktrack-web/static/data/catalog.json")).unwrap()
}

fn config() -> TrackerConfig {
    TrackerConfig::from_json(include_str!("../../walktrack-web/static/data/config.json")).unwrap()
}

#[test]
fn shipped_config_matches_defaults() {
    assert_eq!(config(), TrackerConfig::default_config());
}

#[test]
fn shipped_catalog_filters_as_expected() {
    let store = MemoryStore::new();
    let mut tracker = boot_tracker(config(), catalog(), &store, false).unwrap();
    assert_eq!(tracker.route_visibility().filter(|(_, v)| *v).count(), 5);

    tracker.toggle_filter_chip("bike");
    tracker.toggle_filter_chip("safe");
    let visible: Vec<_> = tracker
        .route_visibility()
        .filter(|(_, v)| *v)
        .map(|(route, _)| route.id.clone())
        .collect();
    assert_eq!(visible, vec!["anillo-verde".to_string()]);

    tracker.set_max_distance(12.0);
    assert!(!tracker.any_route_visible());
}

#[test]
fn full_day_persists_across_reloads() {
    let store = MemoryStore::new();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut tracker = boot_tracker(config(), catalog(), &store, true).unwrap();
    persist_effects(&store, &tracker.boot_effects()).unwrap();
    assert_eq!(store.read(SettingKey::Theme).unwrap().as_deref(), Some("light"));

    persist_effects(&store, &tracker.complete_onboarding("Inés Ortega")).unwrap();

    let effects = tracker.start(0);
    let Effect::StartTicker { generation } = effects[0] else {
        panic!("start should install a ticker");
    };
    for _ in 0..120 {
        tracker.tick(generation, &mut rng);
    }
    let steps = u64::from(tracker.session_steps());
    let effects = tracker.finish(120_000);
    assert!(matches!(
        effects[1],
        Effect::Notify(Notice::SessionSaved { .. })
    ));
    assert_eq!(tracker.total_steps(), 8432 + steps);
    assert_eq!(tracker.history().len(), 3);
    assert_eq!(tracker.history().latest().unwrap().title, "Sesión rápida");

    persist_effects(&store, &tracker.redeem_reward("calcetines")).unwrap();
    persist_effects(&store, &tracker.navigate(Screen::Rewards)).unwrap();
    assert_eq!(store.read(SettingKey::Points).unwrap().as_deref(), Some("450"));

    let reloaded = boot_tracker(config(), catalog(), &store, false).unwrap();
    assert_eq!(reloaded.balance(), 450);
    assert_eq!(reloaded.profile().display_name(), "Inés Ortega");
    assert_eq!(reloaded.profile().initials(), "IO");
    assert!(!reloaded.onboarding_open());
    assert_eq!(reloaded.theme(), walktrack_core::Theme::Light);
    assert_eq!(reloaded.screen(), Screen::Home);
}

#[test]
fn insufficient_funds_never_touches_storage() {
    let store = MemoryStore::with_entries([(SettingKey::Points, "100")]);
    let mut tracker = boot_tracker(config(), catalog(), &store, false).unwrap();
    let written = persist_effects(&store, &tracker.redeem_reward("descuento-gym")).unwrap();
    assert_eq!(written, 0);
    assert_eq!(store.read(SettingKey::Points).unwrap().as_deref(), Some("100"));
}
