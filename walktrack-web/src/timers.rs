//! Owned browser timers. Dropping a handle cancels it.
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A running `setInterval`.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Install `callback` every `period_ms`. `None` outside a browser or when
    /// the browser refuses the timer.
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = dom::window()?;
        let timeout = i32::try_from(period_ms).ok()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(err) => {
                log::error!("failed to install interval: {}", dom::js_error_message(&err));
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// A pending `setTimeout`.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn start(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = dom::window()?;
        let delay = i32::try_from(delay_ms).ok()?;
        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(err) => {
                log::error!("failed to schedule timeout: {}", dom::js_error_message(&err));
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}
