use crate::i18n::{t, tr_args};
use crate::timers::Timeout;
use std::rc::Rc;
use walktrack_core::Notice;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: AttrValue,
    pub detail: AttrValue,
    /// Fading out; removed once the fade completes.
    pub leaving: bool,
}

pub enum ToastAction {
    Push { title: AttrValue, detail: AttrValue },
    Dismiss(u64),
    Remove(u64),
}

impl ToastAction {
    /// Localized toast for a tracker notice.
    #[must_use]
    pub fn from_notice(notice: &Notice) -> Self {
        let key = notice.key();
        Self::Push {
            title: t(&format!("{key}.title")).into(),
            detail: tr_args(&format!("{key}.detail"), &notice.args()).into(),
        }
    }
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn apply(&self, action: ToastAction) -> Self {
        let mut next = self.clone();
        match action {
            ToastAction::Push { title, detail } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    detail,
                    leaving: false,
                });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => {
                if let Some(toast) = next.toasts.iter_mut().find(|toast| toast.id == id) {
                    toast.leaving = true;
                }
            }
            ToastAction::Remove(id) => next.toasts.retain(|toast| toast.id != id),
        }
        next
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub duration_ms: u32,
    pub fade_ms: u32,
    pub on_dismiss: Callback<u64>,
    pub on_remove: Callback<u64>,
}

#[function_component(ToastItem)]
pub fn toast_item(p: &ToastItemProps) -> Html {
    let id = p.toast.id;
    {
        let on_dismiss = p.on_dismiss.clone();
        let duration = p.duration_ms;
        use_effect_with(id, move |id| {
            let id = *id;
            let timer = Timeout::start(duration, move || on_dismiss.emit(id));
            move || drop(timer)
        });
    }
    {
        let on_remove = p.on_remove.clone();
        let fade = p.fade_ms;
        use_effect_with(p.toast.leaving, move |leaving| {
            let timer = if *leaving {
                Timeout::start(fade, move || on_remove.emit(id))
            } else {
                None
            };
            move || drop(timer)
        });
    }
    let close = {
        let on_dismiss = p.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    let class = classes!("toast", p.toast.leaving.then_some("fade-out"));
    html! {
        <div class={class} role="status" data-toast-id={id.to_string()}>
            <div>
                <strong>{ p.toast.title.clone() }</strong>
                if !p.toast.detail.is_empty() {
                    <>
                        <br/>
                        <small>{ p.toast.detail.clone() }</small>
                    </>
                }
            </div>
            <button type="button" aria-label={t("toast.close")} onclick={close}>{ "✕" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toasts: Vec<Toast>,
    pub duration_ms: u32,
    pub fade_ms: u32,
    pub on_dismiss: Callback<u64>,
    pub on_remove: Callback<u64>,
}

#[function_component(ToastStackView)]
pub fn toast_stack(p: &Props) -> Html {
    html! {
        <div id="toast-stack" class="toast-stack" aria-live="polite" aria-atomic="false">
            { for p.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    duration_ms={p.duration_ms}
                    fade_ms={p.fade_ms}
                    on_dismiss={p.on_dismiss.clone()}
                    on_remove={p.on_remove.clone()}
                />
            }) }
        </div>
    }
}
