use futures::executor::block_on;
use walktrack_core::{
    ActivityEntry, Reward, Route, RouteFilter, RouteKind, SessionControls, SessionStatus, Theme,
};
use walktrack_web::components::activity_list::ActivityList;
use walktrack_web::components::activity_panel::ActivityPanel;
use walktrack_web::components::header::Header;
use walktrack_web::components::nav_bar::NavBar;
use walktrack_web::components::onboarding::Onboarding;
use walktrack_web::components::rewards_panel::{RewardOffer, RewardsPanel};
use walktrack_web::components::route_panel::RoutePanel;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn route(id: &str, kind: RouteKind, distance_km: f64, safe: bool) -> Route {
    Route {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        distance_km,
        safe,
    }
}

#[test]
fn header_offers_the_other_theme() {
    walktrack_web::i18n::set_lang("es");
    let props = walktrack_web::components::header::Props {
        display_name: AttrValue::from("Inés Ortega"),
        initials: AttrValue::from("IO"),
        is_premium: true,
        theme: Theme::Light,
        on_toggle_theme: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Modo oscuro"));
    assert!(html.contains("IO"));
    assert!(html.contains("premium-badge"));
}

#[test]
fn nav_marks_the_active_screen() {
    walktrack_web::i18n::set_lang("es");
    let props = walktrack_web::components::nav_bar::Props {
        active: walktrack_core::Screen::Routes,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NavBar>::with_props(props).render());
    assert_eq!(html.matches("nav-active").count(), 1);
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("Rutas"));
}

#[test]
fn paused_panel_offers_resume_and_finish() {
    walktrack_web::i18n::set_lang("es");
    let props = walktrack_web::components::activity_panel::Props {
        status: SessionStatus::Paused,
        elapsed: AttrValue::from("00:01:05"),
        steps: 42,
        controls: SessionControls::for_status(SessionStatus::Paused),
        on_start: Callback::noop(),
        on_pause: Callback::noop(),
        on_finish: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ActivityPanel>::with_props(props).render());
    assert!(html.contains("Pausada"));
    assert!(html.contains("Reanudar"));
    assert!(html.contains("00:01:05"));
    assert!(html.contains("42 pasos"));
}

#[test]
fn activity_list_shows_entries_or_empty_state() {
    walktrack_web::i18n::set_lang("es");
    let entries = vec![ActivityEntry {
        title: "Sesión rápida".into(),
        summary: "0.2 km · 1 min".into(),
        tag: "Caminar".into(),
    }];
    let html = block_on(
        LocalServerRenderer::<ActivityList>::with_props(
            walktrack_web::components::activity_list::Props { entries },
        )
        .render(),
    );
    assert!(html.contains("0.2 km · 1 min"));
    assert!(html.contains("1 actividad"));

    let html = block_on(
        LocalServerRenderer::<ActivityList>::with_props(
            walktrack_web::components::activity_list::Props {
                entries: Vec::new(),
            },
        )
        .render(),
    );
    assert!(html.contains("Aún no hay actividades"));
}

#[test]
fn unaffordable_rewards_are_disabled() {
    walktrack_web::i18n::set_lang("es");
    let reward = |id: &str, cost: u32| Reward {
        id: id.into(),
        title: id.into(),
        desc: String::new(),
        cost,
    };
    let props = walktrack_web::components::rewards_panel::Props {
        balance: AttrValue::from("450"),
        offers: vec![
            RewardOffer {
                reward: reward("cafe", 300),
                affordable: true,
            },
            RewardOffer {
                reward: reward("descuento-gym", 1500),
                affordable: false,
            },
        ],
        is_premium: false,
        premium_bonus: 150,
        on_redeem: Callback::noop(),
        on_premium: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RewardsPanel>::with_props(props).render());
    assert_eq!(html.matches("disabled").count(), 1);
    assert!(html.contains("1500 pts"));
    assert!(html.contains("Suscribirme"));
}

#[test]
fn premium_button_locks_once_active() {
    walktrack_web::i18n::set_lang("es");
    let props = walktrack_web::components::rewards_panel::Props {
        balance: AttrValue::from("0"),
        offers: Vec::new(),
        is_premium: true,
        premium_bonus: 150,
        on_redeem: Callback::noop(),
        on_premium: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RewardsPanel>::with_props(props).render());
    assert_eq!(html.matches("disabled").count(), 1);
    assert!(html.contains("premium-active"));
    assert!(html.contains("Premium activo"));
    assert!(!html.contains("Suscribirme"));
}

#[test]
fn route_panel_hides_filtered_cards_and_shows_empty_state() {
    walktrack_web::i18n::set_lang("es");
    let mut filter = RouteFilter::with_max_distance(5.0);
    filter.set_safe_only(true);
    let routes = [
        route("parque-oeste", RouteKind::Walk, 3.5, true),
        route("madrid-rio", RouteKind::Bike, 10.0, false),
    ];
    let props = walktrack_web::components::route_panel::Props {
        routes: routes
            .iter()
            .map(|r| (r.clone(), filter.is_visible(r)))
            .collect(),
        any_visible: filter.any_visible(&routes),
        filter: filter.clone(),
        on_toggle_chip: Callback::noop(),
        on_distance: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RoutePanel>::with_props(props).render());
    assert_eq!(html.matches("chip-active").count(), 1);
    assert!(html.contains("3.5 km"));
    assert_eq!(html.matches("hidden").count(), 2);

    filter.set_max_distance(1.0);
    let props = walktrack_web::components::route_panel::Props {
        routes: routes.iter().map(|r| (r.clone(), false)).collect(),
        any_visible: filter.any_visible(&routes),
        filter,
        on_toggle_chip: Callback::noop(),
        on_distance: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RoutePanel>::with_props(props).render());
    assert!(html.contains("No hay rutas con estos filtros"));
    assert!(html.contains("1 km"));
}

#[test]
fn onboarding_submit_starts_disabled() {
    walktrack_web::i18n::set_lang("es");
    let props = walktrack_web::components::onboarding::Props {
        open: true,
        on_submit: Callback::noop(),
        initial: AttrValue::default(),
    };
    let html = block_on(LocalServerRenderer::<Onboarding>::with_props(props).render());
    assert!(html.contains("onboarding-start"));
    assert!(html.contains("disabled"));

    let props = walktrack_web::components::onboarding::Props {
        open: true,
        on_submit: Callback::noop(),
        initial: AttrValue::from("Ana  López"),
    };
    let html = block_on(LocalServerRenderer::<Onboarding>::with_props(props).render());
    assert!(!html.contains("disabled"));
    assert!(html.contains("Ana López"));
}
