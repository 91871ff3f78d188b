use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use walktrack_core::{Reward, format_grouped};
use yew::prelude::*;

/// A catalog reward plus whether the current balance covers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardOffer {
    pub reward: Reward,
    pub affordable: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Balance, already formatted.
    pub balance: AttrValue,
    pub offers: Vec<RewardOffer>,
    pub is_premium: bool,
    pub premium_bonus: u32,
    pub on_redeem: Callback<String>,
    pub on_premium: Callback<()>,
}

fn points_label(points: u64) -> String {
    let formatted = format_grouped(points);
    let mut vars = BTreeMap::new();
    vars.insert("points", formatted.as_str());
    tr("rewards.points", Some(&vars))
}

#[function_component(RewardsPanel)]
pub fn rewards_panel(p: &Props) -> Html {
    let premium = {
        let cb = p.on_premium.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let bonus = p.premium_bonus.to_string();
    let premium_desc = {
        let mut vars = BTreeMap::new();
        vars.insert("bonus", bonus.as_str());
        tr("premium.desc", Some(&vars))
    };
    html! {
        <>
            <section class="card points" aria-labelledby="points-title">
                <h2 id="points-title">{ t("rewards.balance") }</h2>
                <p class="points-value"><span id="points-value">{ p.balance.clone() }</span>{ " pts" }</p>
            </section>
            <section class="card" aria-labelledby="rewards-title">
                <h2 id="rewards-title">{ t("rewards.title") }</h2>
                <ul class="reward-list">
                    { for p.offers.iter().map(|offer| {
                        let onclick = {
                            let cb = p.on_redeem.clone();
                            let id = offer.reward.id.clone();
                            Callback::from(move |_| cb.emit(id.clone()))
                        };
                        html! {
                            <li class="reward-card" data-reward={offer.reward.id.clone()}>
                                <div>
                                    <strong>{ offer.reward.title.clone() }</strong>
                                    <small>{ offer.reward.desc.clone() }</small>
                                </div>
                                <span class="reward-cost">{ points_label(u64::from(offer.reward.cost)) }</span>
                                <button
                                    type="button"
                                    class="btn redeem-btn"
                                    data-cost={offer.reward.cost.to_string()}
                                    disabled={!offer.affordable}
                                    {onclick}
                                >
                                    { t("rewards.redeem") }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </section>
            <section class={classes!("card", "premium", p.is_premium.then_some("premium-active"))}
                aria-labelledby="premium-title">
                <h2 id="premium-title">{ t("premium.title") }</h2>
                <p>{ premium_desc }</p>
                <button
                    id="premium-btn"
                    type="button"
                    class="btn btn-primary"
                    disabled={p.is_premium}
                    onclick={premium}>
                    { if p.is_premium { t("premium.active") } else { t("premium.subscribe") } }
                </button>
            </section>
        </>
    }
}
