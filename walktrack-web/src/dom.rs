use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use walktrack_core::{Theme, TimestampMs};
use web_sys::{Document, Storage, Window};

const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";
const LIGHT_MODE_CLASS: &str = "light-mode";

/// Retrieve the global `window` object, `None` outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle, `None` when the browser denies it.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Wall-clock milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> TimestampMs {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as TimestampMs
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

/// Entropy for the step generator.
#[must_use]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5741_4C4B
    }
}

/// Whether the operating system asks for a light colour scheme.
#[must_use]
pub fn system_prefers_light() -> bool {
    window()
        .and_then(|win| win.match_media(LIGHT_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Reflect the theme on the `<body>` class list.
pub fn apply_theme(theme: Theme) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = match theme {
        Theme::Light => classes.add_1(LIGHT_MODE_CLASS),
        Theme::Dark => classes.remove_1(LIGHT_MODE_CLASS),
    };
    if let Err(err) = result {
        log::warn!("failed to apply theme: {}", js_error_message(&err));
    }
}

/// Scroll the page back to the top after switching screens.
pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
