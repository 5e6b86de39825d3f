//! Not found page component
//!
//! Rendered by the router fallback for every path other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::BRAND;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found - {}", BRAND) />

        <div class="min-h-screen bg-navy-900 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 border border-white/10 rounded-full flex items-center justify-center">
                    <Icon name=icons::ACTIVITY class="w-12 h-12 text-neon-blue" />
                </div>

                <h1 class="font-display text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Signal Lost"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-neon-blue to-neon-purple text-navy-900 font-bold rounded-lg transition-all"
                >
                    "Back to " {BRAND}
                </A>
            </div>
        </div>
    }
}
