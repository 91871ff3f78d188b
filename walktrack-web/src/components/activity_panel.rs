//! Live session card: status badge, timer, step counter and controls.
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use walktrack_core::{SessionControls, SessionStatus, status_label_key};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: SessionStatus,
    /// `HH:MM:SS`.
    pub elapsed: AttrValue,
    pub steps: u32,
    pub controls: SessionControls,
    pub on_start: Callback<()>,
    pub on_pause: Callback<()>,
    pub on_finish: Callback<()>,
}

fn status_class(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Running => "status-running",
        SessionStatus::Paused => "status-paused",
        SessionStatus::Idle => "status-idle",
    }
}

#[function_component(ActivityPanel)]
pub fn activity_panel(p: &Props) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let steps_text = {
        let count = p.steps.to_string();
        let mut vars = BTreeMap::new();
        vars.insert("count", count.as_str());
        tr("session.steps", Some(&vars))
    };
    let controls = p.controls;
    html! {
        <section class="card live-session" aria-labelledby="live-title">
            <div class="card-head">
                <h2 id="live-title">{ t("session.title") }</h2>
                <span id="live-status" class={classes!("status-badge", status_class(p.status))}>
                    { t(status_label_key(p.status)) }
                </span>
            </div>
            <p class="timer" aria-label={t("session.timer")}>
                <span id="live-timer">{ p.elapsed.clone() }</span>
            </p>
            <p id="live-steps" class="live-steps" aria-live="polite">{ steps_text }</p>
            <div class="session-controls">
                <button id="start-btn" type="button" class="btn btn-primary"
                    disabled={!controls.start_enabled} onclick={emit(&p.on_start)}>
                    { t(controls.start_label_key) }
                </button>
                <button id="pause-btn" type="button" class="btn"
                    disabled={!controls.pause_enabled} onclick={emit(&p.on_pause)}>
                    { t("session.pause") }
                </button>
                <button id="finish-btn" type="button" class="btn btn-outline"
                    disabled={!controls.finish_enabled} onclick={emit(&p.on_finish)}>
                    { t("session.finish") }
                </button>
            </div>
        </section>
    }
}
