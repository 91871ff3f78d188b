use crate::app::bootstrap::boot_tracker_from_browser;
use crate::components::toast::ToastStack;
use crate::dom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use std::rc::Rc;
use walktrack_core::{TickGeneration, Tracker};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Rc<RefCell<Tracker>>,
    pub rng: Rc<RefCell<ChaCha20Rng>>,
    /// Generation of the ticker that should be running, if any.
    pub ticker: UseStateHandle<Option<TickGeneration>>,
    pub toasts: UseReducerHandle<ToastStack>,
    pub current_language: UseStateHandle<String>,
    pub refresh: UseForceUpdateHandle,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        tracker: use_mut_ref(boot_tracker_from_browser),
        rng: use_mut_ref(|| ChaCha20Rng::seed_from_u64(dom::entropy_seed())),
        ticker: use_state(|| None::<TickGeneration>),
        toasts: use_reducer(ToastStack::default),
        current_language: use_state(crate::i18n::current_lang),
        refresh: use_force_update(),
    }
}
