use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub display_name: AttrValue,
    pub initials: AttrValue,
    pub is_premium: bool,
    /// Lifetime steps, already formatted.
    pub lifetime_steps: AttrValue,
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <section class="card profile" aria-labelledby="profile-title">
            <h2 id="profile-title">{ t("profile.title") }</h2>
            <div class="profile-summary">
                <span class="avatar avatar-lg" aria-hidden="true">{ p.initials.clone() }</span>
                <div>
                    <strong>{ p.display_name.clone() }</strong>
                    if p.is_premium {
                        <span class="badge premium-badge">{ t("profile.premium_badge") }</span>
                    }
                </div>
            </div>
            <p>
                <span class="muted">{ t("profile.lifetime") }</span>
                { " " }
                <strong>{ p.lifetime_steps.clone() }</strong>
            </p>
            <label for="lang-select">{ t("profile.language") }</label>
            <select id="lang-select" onchange={on_change}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>
                        { meta.name }
                    </option>
                }) }
            </select>
        </section>
    }
}
