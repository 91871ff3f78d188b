use crate::i18n::t;
use walktrack_core::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    html! {
        <nav class="bottom-nav" aria-label={t("nav.label")}>
            { for Screen::ALL.iter().map(|screen| {
                let screen = *screen;
                let active = screen == p.active;
                let onclick = {
                    let cb = p.on_navigate.clone();
                    Callback::from(move |_| cb.emit(screen))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("nav-item", active.then_some("nav-active"))}
                        data-screen={screen.as_str()}
                        aria-current={active.then_some("page")}
                        {onclick}
                    >
                        { t(&screen.label_key()) }
                    </button>
                }
            }) }
        </nav>
    }
}
