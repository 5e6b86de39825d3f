//! Browser-side helpers: scoped window listeners and viewport queries

use leptos::ev::EventDescriptor;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

/// Window event listeners owned by a component.
///
/// Every listener is removed when the subscription is dropped. Call
/// [`Subscription::bind_to_owner`] to drop it when the reactive owner (the
/// component) is cleaned up.
#[derive(Default)]
#[must_use = "listeners are removed as soon as the subscription is dropped"]
pub struct Subscription {
    handles: Vec<WindowListenerHandle>,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<E>(mut self, event: E, cb: impl Fn(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        self.handles.push(window_event_listener(event, cb));
        self
    }

    pub fn bind_to_owner(self) {
        on_cleanup(move || drop(self));
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

/// Current vertical scroll offset of the window
pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

/// Inner width and height of the window in CSS pixels
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
