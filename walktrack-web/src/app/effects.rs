//! Executes the side effects requested by tracker commands.
use crate::app::state::AppState;
use crate::components::toast::ToastAction;
use crate::dom;
use crate::storage;
use walktrack_core::{Effect, Effects, Tracker};

impl AppState {
    /// Run a tracker command, carry out its effects and re-render.
    pub fn dispatch(&self, command: impl FnOnce(&mut Tracker) -> Effects) {
        let effects = {
            let mut tracker = self.tracker.borrow_mut();
            command(&mut tracker)
        };
        apply_effects(self, &effects);
    }
}

pub fn apply_effects(state: &AppState, effects: &[Effect]) {
    storage::persist(effects);
    for effect in effects {
        match effect {
            Effect::Persist { .. } => {}
            Effect::Notify(notice) => state.toasts.dispatch(ToastAction::from_notice(notice)),
            Effect::StartTicker { generation } => state.ticker.set(Some(*generation)),
            Effect::StopTicker => state.ticker.set(None),
            Effect::Navigate { screen } => {
                log::debug!("showing {} screen", screen.as_str());
                dom::scroll_to_top();
            }
        }
    }
    state.refresh.force_update();
}
