use crate::i18n::t;
use walktrack_core::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub display_name: AttrValue,
    pub initials: AttrValue,
    pub is_premium: bool,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let light = matches!(p.theme, Theme::Light);
    html! {
        <header role="banner" class="app-header">
            <a href="#main" class="sr-only">{ t("app.skip_to_content") }</a>
            <div class="header-content">
                <div class="brand">
                    <h1>{ t("app.title") }</h1>
                    <p class="tagline">{ t("app.tagline") }</p>
                </div>
                <div class="header-right">
                    <button
                        id="theme-toggle"
                        type="button"
                        class="theme-toggle"
                        aria-pressed={light.to_string()}
                        onclick={toggle}
                    >
                        { t(p.theme.toggle_label_key()) }
                    </button>
                    <div class="profile-chip">
                        <span id="avatar-initials" class="avatar" aria-hidden="true">{ p.initials.clone() }</span>
                        <span id="profile-name">{ p.display_name.clone() }</span>
                        if p.is_premium {
                            <span class="badge premium-badge">{ t("profile.premium_badge") }</span>
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}
