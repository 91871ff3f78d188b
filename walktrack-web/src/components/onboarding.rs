//! First-run name prompt.
//!
//! The input is sanitized as the user types and the submit button stays
//! disabled until the cleaned name validates.
use crate::i18n::t;
use walktrack_core::{is_valid_name, sanitize_name};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_submit: Callback<String>,
    #[prop_or_default]
    pub initial: AttrValue,
}

#[function_component(Onboarding)]
pub fn onboarding(p: &Props) -> Html {
    let name = use_state(|| sanitize_name(&p.initial));
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(p.open, move |open| {
            if *open && let Some(input) = input_ref.cast::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        });
    }

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            {
                let cleaned = sanitize_name(&input.value());
                if cleaned != input.value() {
                    input.set_value(&cleaned);
                }
                name.set(cleaned);
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*name).clone());
        })
    };

    let valid = is_valid_name(&name);
    html! {
        <div
            id="onboarding"
            class="onboarding"
            role="dialog"
            aria-modal="true"
            aria-labelledby="onboarding-title"
            aria-hidden={(!p.open).to_string()}
            hidden={!p.open}
        >
            <form class="card onboarding-card" onsubmit={on_submit}>
                <h2 id="onboarding-title">{ t("onboarding.title") }</h2>
                <p>{ t("onboarding.desc") }</p>
                <label for="onboarding-name">{ t("onboarding.label") }</label>
                <input
                    id="onboarding-name"
                    ref={input_ref}
                    type="text"
                    autocomplete="name"
                    placeholder={t("onboarding.placeholder")}
                    value={(*name).clone()}
                    oninput={on_input}
                    aria-describedby="onboarding-hint"
                />
                <small id="onboarding-hint" class="muted">{ t("onboarding.hint") }</small>
                <button id="onboarding-start" type="submit" class="btn btn-primary" disabled={!valid}>
                    { t("onboarding.submit") }
                </button>
            </form>
        </div>
    }
}
