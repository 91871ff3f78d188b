use crate::app::handlers;
use crate::app::state::AppState;
use crate::components::activity_panel::ActivityPanel;
use crate::components::header::Header;
use crate::components::home::HomeScreen;
use crate::components::nav_bar::NavBar;
use crate::components::onboarding::Onboarding;
use crate::components::profile_panel::ProfilePanel;
use crate::components::rewards_panel::{RewardOffer, RewardsPanel};
use crate::components::route_panel::RoutePanel;
use crate::components::toast::ToastStackView;
use crate::dom;
use walktrack_core::{Screen, Tracker};
use yew::prelude::*;

fn render_screen(state: &AppState, tracker: &Tracker) -> Html {
    match tracker.screen() {
        Screen::Home => html! {
            <HomeScreen
                total_steps={AttrValue::from(tracker.total_steps_display())}
                entries={tracker.history().entries().to_vec()}
                on_quick_start={handlers::build_start(state)}
                on_join_challenge={handlers::build_join_challenge(state)}
            />
        },
        Screen::Activity => html! {
            <ActivityPanel
                status={tracker.status()}
                elapsed={AttrValue::from(tracker.elapsed_display(dom::now_ms()))}
                steps={tracker.session_steps()}
                controls={tracker.controls()}
                on_start={handlers::build_start(state)}
                on_pause={handlers::build_pause(state)}
                on_finish={handlers::build_finish(state)}
            />
        },
        Screen::Routes => html! {
            <RoutePanel
                routes={tracker
                    .route_visibility()
                    .map(|(route, visible)| (route.clone(), visible))
                    .collect::<Vec<_>>()}
                filter={tracker.filter().clone()}
                any_visible={tracker.any_route_visible()}
                on_toggle_chip={handlers::build_toggle_chip(state)}
                on_distance={handlers::build_distance_change(state)}
            />
        },
        Screen::Rewards => html! {
            <RewardsPanel
                balance={AttrValue::from(tracker.balance_display())}
                offers={tracker
                    .rewards()
                    .iter()
                    .map(|reward| RewardOffer {
                        reward: reward.clone(),
                        affordable: tracker.can_afford(reward.cost),
                    })
                    .collect::<Vec<_>>()}
                is_premium={tracker.is_premium()}
                premium_bonus={tracker.config().premium_bonus}
                on_redeem={handlers::build_redeem(state)}
                on_premium={handlers::build_premium(state)}
            />
        },
        Screen::Profile => html! {
            <ProfilePanel
                display_name={AttrValue::from(tracker.profile().display_name().to_string())}
                initials={AttrValue::from(tracker.profile().initials())}
                is_premium={tracker.is_premium()}
                lifetime_steps={AttrValue::from(tracker.total_steps_display())}
                current_lang={AttrValue::from((*state.current_language).clone())}
                on_lang_change={handlers::build_lang_change(state)}
            />
        },
    }
}

pub fn render_app(state: &AppState) -> Html {
    let tracker = state.tracker.borrow();
    let config = tracker.config();
    html! {
        <>
            <Header
                display_name={AttrValue::from(tracker.profile().display_name().to_string())}
                initials={AttrValue::from(tracker.profile().initials())}
                is_premium={tracker.is_premium()}
                theme={tracker.theme()}
                on_toggle_theme={handlers::build_toggle_theme(state)}
            />
            <main id="main" role="main" class="app-main" data-screen={tracker.screen().as_str()}>
                { render_screen(state, &tracker) }
            </main>
            <NavBar active={tracker.screen()} on_navigate={handlers::build_navigate(state)} />
            <Onboarding
                open={tracker.onboarding_open()}
                on_submit={handlers::build_onboarding_submit(state)}
            />
            <ToastStackView
                toasts={state.toasts.toasts().to_vec()}
                duration_ms={config.toast_duration_ms}
                fade_ms={config.toast_fade_ms}
                on_dismiss={handlers::build_dismiss_toast(state)}
                on_remove={handlers::build_remove_toast(state)}
            />
        </>
    }
}
