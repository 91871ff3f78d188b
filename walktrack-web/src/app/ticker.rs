use crate::app::state::AppState;
use crate::timers::Interval;
use yew::prelude::*;

/// Keep one interval alive for the current tick generation.
///
/// A new generation tears the previous interval down before installing the
/// next one, and `None` leaves no interval at all.
#[hook]
pub fn use_session_ticker(app_state: &AppState) {
    let tracker = app_state.tracker.clone();
    let rng = app_state.rng.clone();
    let refresh = app_state.refresh.clone();
    let period_ms = tracker.borrow().config().tick_interval_ms;
    use_effect_with(*app_state.ticker, move |generation| {
        let interval = (*generation).and_then(|generation| {
            Interval::start(period_ms, move || {
                let added = tracker.borrow_mut().tick(generation, &mut *rng.borrow_mut());
                match added {
                    Some(_) => refresh.force_update(),
                    None => log::trace!("dropped stale tick for generation {}", generation.value()),
                }
            })
        });
        move || drop(interval)
    });
}
