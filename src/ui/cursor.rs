//! Custom cursor overlay
//!
//! Renders a dot and a trailing ring that follow the pointer. Both grow while
//! the pointer is over something interactive; the dot shrinks while a button
//! is held. Window listeners live as long as the component.

use leptos::prelude::*;

use crate::core::PointerState;

#[cfg(feature = "hydrate")]
use crate::core::{ElementProbe, nearest_interactive};

#[cfg(feature = "hydrate")]
impl ElementProbe for web_sys::Element {
    fn tag_name(&self) -> String {
        web_sys::Element::tag_name(self)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

#[cfg(feature = "hydrate")]
fn target_is_interactive(ev: &web_sys::MouseEvent) -> bool {
    use leptos::wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(nearest_interactive)
        .is_some()
}

/// Pointer follower overlay
#[component]
pub fn CustomCursor() -> impl IntoView {
    let pointer = RwSignal::new(PointerState::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::dom::Subscription;
        use leptos::ev::{mousedown, mousemove, mouseup};

        Subscription::new()
            .listen(mousemove, move |ev| {
                let hovering = target_is_interactive(&ev);
                pointer.update(|p| p.moved(f64::from(ev.client_x()), f64::from(ev.client_y()), hovering));
            })
            .listen(mousedown, move |_| pointer.update(PointerState::press))
            .listen(mouseup, move |_| pointer.update(PointerState::release))
            .bind_to_owner();
    }

    view! {
        // Main dot
        <div
            class="fixed pointer-events-none z-50 rounded-full mix-blend-difference transition-transform duration-100 ease-out"
            style=move || pointer.with(|p| p.dot().style())
            aria-hidden="true"
        ></div>
        // Trailing ring
        <div
            class="fixed pointer-events-none z-40 rounded-full border border-neon-blue transition-all duration-300 ease-out"
            style=move || pointer.with(|p| p.ring().style())
            aria-hidden="true"
        ></div>
    }
}
