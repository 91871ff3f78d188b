use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use walktrack_core::ActivityEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Vec<ActivityEntry>,
}

#[function_component(ActivityList)]
pub fn activity_list(p: &Props) -> Html {
    let count = p.entries.len().to_string();
    let heading_count = {
        let mut vars = BTreeMap::new();
        vars.insert("count", count.as_str());
        tr("home.activity_count", Some(&vars))
    };
    html! {
        <section class="card" aria-labelledby="recent-title">
            <div class="card-head">
                <h2 id="recent-title">{ t("home.recent") }</h2>
                <span class="muted">{ heading_count }</span>
            </div>
            if p.entries.is_empty() {
                <p class="empty-state">{ t("home.empty") }</p>
            } else {
                <ul id="activity-list" class="activity-list">
                    { for p.entries.iter().map(|entry| html! {
                        <li class="activity-item">
                            <div>
                                <strong>{ entry.title.clone() }</strong>
                                <small>{ entry.summary.clone() }</small>
                            </div>
                            <span class="tag">{ entry.tag.clone() }</span>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
