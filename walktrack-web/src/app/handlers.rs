use crate::app::state::AppState;
use crate::components::toast::ToastAction;
use crate::dom;
use walktrack_core::{Effects, Screen};
use yew::prelude::*;

pub fn build_start(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(|tracker| tracker.start(dom::now_ms())))
}

pub fn build_pause(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(|tracker| tracker.pause(dom::now_ms())))
}

pub fn build_finish(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(|tracker| tracker.finish(dom::now_ms())))
}

pub fn build_redeem(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |reward_id: String| {
        state.dispatch(|tracker| tracker.redeem_reward(&reward_id));
    })
}

pub fn build_premium(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(walktrack_core::Tracker::activate_premium))
}

pub fn build_onboarding_submit(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |raw: String| {
        state.dispatch(|tracker| tracker.complete_onboarding(&raw));
    })
}

pub fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(walktrack_core::Tracker::toggle_theme))
}

pub fn build_navigate(state: &AppState) -> Callback<Screen> {
    let state = state.clone();
    Callback::from(move |screen: Screen| state.dispatch(|tracker| tracker.navigate(screen)))
}

pub fn build_join_challenge(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| state.dispatch(|tracker| tracker.join_challenge()))
}

pub fn build_toggle_chip(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |key: String| {
        state.dispatch(|tracker| {
            tracker.toggle_filter_chip(&key);
            Effects::new()
        });
    })
}

pub fn build_distance_change(state: &AppState) -> Callback<f64> {
    let state = state.clone();
    Callback::from(move |km: f64| {
        state.dispatch(|tracker| {
            tracker.set_max_distance(km);
            Effects::new()
        });
    })
}

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

pub fn build_dismiss_toast(state: &AppState) -> Callback<u64> {
    let toasts = state.toasts.clone();
    Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
}

pub fn build_remove_toast(state: &AppState) -> Callback<u64> {
    let toasts = state.toasts.clone();
    Callback::from(move |id: u64| toasts.dispatch(ToastAction::Remove(id)))
}
