use leptos::prelude::*;

/// Ring spinner; the ring takes the current text color
#[component]
pub fn Spinner(
    /// Size classes
    #[prop(default = "w-5 h-5")]
    size: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "{} border-2 rounded-full border-current border-t-transparent animate-spin {}",
        size, class
    );

    view! {
        <div class=classes role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
