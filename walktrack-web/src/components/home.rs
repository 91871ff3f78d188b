use crate::components::activity_list::ActivityList;
use crate::i18n::t;
use walktrack_core::ActivityEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Lifetime steps, already formatted.
    pub total_steps: AttrValue,
    pub entries: Vec<ActivityEntry>,
    pub on_quick_start: Callback<()>,
    pub on_join_challenge: Callback<()>,
}

#[function_component(HomeScreen)]
pub fn home_screen(p: &Props) -> Html {
    let quick_start = {
        let cb = p.on_quick_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let join = {
        let cb = p.on_join_challenge.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <>
            <section class="card stats" aria-labelledby="stats-title">
                <h2 id="stats-title">{ t("home.total_steps") }</h2>
                <p id="stats-number" class="stats-number">{ p.total_steps.clone() }</p>
                <button type="button" class="btn btn-primary" onclick={quick_start}>
                    { t("home.quick_start") }
                </button>
            </section>
            <section class="card challenge" aria-labelledby="challenge-title">
                <h2 id="challenge-title">{ t("challenge.title") }</h2>
                <p>{ t("challenge.desc") }</p>
                <button id="join-challenge" type="button" class="btn" onclick={join}>
                    { t("challenge.join") }
                </button>
            </section>
            <ActivityList entries={p.entries.clone()} />
        </>
    }
}
