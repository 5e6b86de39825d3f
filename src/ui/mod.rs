pub mod chart;
pub mod common;
pub mod contact_form;
pub mod cursor;
pub mod dashboard_preview;
#[cfg(feature = "hydrate")]
mod dom;
pub mod faq;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod pages;

pub use icon::{Icon, icons};

/// Server-render a view inside a fresh reactive owner
#[cfg(test)]
pub(crate) fn render_to_html<V: leptos::prelude::IntoView>(view: impl FnOnce() -> V) -> String {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.with(|| view().to_html())
}
