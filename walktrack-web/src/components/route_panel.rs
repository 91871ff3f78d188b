//! Route finder: filter chips, distance slider and the route cards.
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use walktrack_core::{FilterChip, Route, RouteFilter, format_km};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const SLIDER_MAX_KM: f64 = 20.0;
const SLIDER_STEP_KM: f64 = 0.5;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Every catalog route paired with its visibility.
    pub routes: Vec<(Route, bool)>,
    pub filter: RouteFilter,
    pub any_visible: bool,
    pub on_toggle_chip: Callback<String>,
    pub on_distance: Callback<f64>,
}

fn km_label(km: f64) -> String {
    let formatted = format_km(km);
    let mut vars = BTreeMap::new();
    vars.insert("km", formatted.as_str());
    tr("routes.distance", Some(&vars))
}

#[function_component(RoutePanel)]
pub fn route_panel(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_distance.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            match input.value().parse::<f64>() {
                Ok(km) => cb.emit(km),
                Err(err) => log::debug!("ignoring slider value `{}`: {err}", input.value()),
            }
        })
    };
    let max_km = p.filter.max_distance_km();
    html! {
        <section class="card routes" aria-labelledby="routes-title">
            <h2 id="routes-title">{ t("routes.title") }</h2>
            <div id="route-filters" class="filters" role="group" aria-label={t("routes.filters")}>
                { for FilterChip::ALL.iter().map(|chip| {
                    let key = chip.key();
                    let active = p.filter.is_chip_active(*chip);
                    let onclick = {
                        let cb = p.on_toggle_chip.clone();
                        Callback::from(move |_| cb.emit(key.to_string()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("chip", active.then_some("chip-active"))}
                            data-filter={key}
                            aria-pressed={active.to_string()}
                            {onclick}
                        >
                            { t(&format!("routes.chip.{key}")) }
                        </button>
                    }
                }) }
            </div>
            <label class="distance-filter" for="distance-filter">
                <span>{ t("routes.max_distance") }</span>
                <span id="distance-value">{ km_label(max_km) }</span>
            </label>
            <input
                id="distance-filter"
                type="range"
                min="0"
                max={SLIDER_MAX_KM.to_string()}
                step={SLIDER_STEP_KM.to_string()}
                value={max_km.to_string()}
                oninput={on_input}
            />
            <ul class="route-list">
                { for p.routes.iter().map(|(route, visible)| html! {
                    <li
                        class="route-card"
                        data-route={route.id.clone()}
                        data-type={route.kind.as_str()}
                        data-distance={route.distance_km.to_string()}
                        data-safe={route.safe.to_string()}
                        hidden={!*visible}
                    >
                        <strong>{ route.name.clone() }</strong>
                        <span class="route-meta">
                            { t(&format!("routes.kind.{}", route.kind)) }
                            { " · " }
                            { km_label(route.distance_km) }
                        </span>
                        if route.safe {
                            <span class="badge">{ t("routes.safe_badge") }</span>
                        }
                    </li>
                }) }
            </ul>
            <p id="routes-empty" class="empty-state" hidden={p.any_visible}>{ t("routes.empty") }</p>
        </section>
    }
}
