use crate::dom;
use yew::prelude::*;

pub mod bootstrap;
pub mod effects;
pub mod handlers;
pub mod state;
pub mod ticker;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    ticker::use_session_ticker(&app_state);

    let theme = app_state.tracker.borrow().theme();
    use_effect_with(theme, |theme| dom::apply_theme(*theme));

    view::render_app(&app_state)
}
