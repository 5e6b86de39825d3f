//! Fixed navigation bar with scroll-dependent style and a mobile menu

use leptos::prelude::*;

use crate::core::{BRAND, NAV_ITEMS, NavbarState};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavbarState::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::dom::{Subscription, scroll_y};

        let sample = move || {
            let Some(offset) = scroll_y() else {
                return;
            };
            let mut next = nav.get_untracked();
            if next.scroll_to(offset) {
                nav.set(next);
            }
        };

        // The page may be restored mid-scroll
        Effect::new(move |_| sample());

        Subscription::new()
            .listen(leptos::ev::scroll, move |_| sample())
            .bind_to_owner();
    }

    let nav_class = move || {
        format!(
            "fixed top-0 left-0 right-0 z-40 transition-all duration-300 {}",
            nav.with(|n| n.style().class())
        )
    };

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a href="#" class="flex items-center gap-2 group clickable">
                    <div class="w-10 h-10 bg-gradient-to-tr from-neon-blue to-neon-purple rounded-lg flex items-center justify-center text-white font-bold text-xl group-hover:rotate-12 transition-transform">
                        "TN"
                    </div>
                    <span class="font-display font-bold text-2xl text-white tracking-tight">{BRAND}</span>
                </a>

                // Desktop navigation
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS.iter().map(|item| view! {
                        <a
                            href=item.href
                            class="text-gray-300 hover:text-neon-blue transition-colors text-sm font-medium clickable"
                        >
                            {item.label}
                        </a>
                    }).collect_view()}
                    <button class="px-6 py-2.5 bg-white/5 hover:bg-white/10 border border-white/10 text-white rounded-full transition-all hover:scale-105 clickable font-medium text-sm">
                        "Log In"
                    </button>
                    <button class="px-6 py-2.5 bg-gradient-to-r from-neon-blue to-neon-purple text-navy-900 font-bold rounded-full transition-all hover:shadow-[0_0_20px_rgba(0,240,255,0.4)] clickable text-sm">
                        "Get Started"
                    </button>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden text-white clickable"
                    on:click=move |_| nav.update(NavbarState::toggle_menu)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || nav.with(|n| n.is_menu_open()).to_string()
                >
                    {move || {
                        if nav.with(|n| n.is_menu_open()) {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || nav.with(|n| n.is_menu_open())>
                <div class="md:hidden absolute top-full left-0 right-0 bg-navy-900 border-b border-white/10 p-6 flex flex-col gap-4">
                    {NAV_ITEMS.iter().map(|item| view! {
                        <a
                            href=item.href
                            class="text-gray-300 hover:text-neon-blue py-2"
                            on:click=move |_| nav.update(NavbarState::link_selected)
                        >
                            {item.label}
                        </a>
                    }).collect_view()}
                    <div class="h-px bg-white/10 my-2"></div>
                    <button class="w-full py-3 text-center text-white bg-white/5 rounded-lg">"Log In"</button>
                    <button class="w-full py-3 text-center bg-neon-blue text-navy-900 font-bold rounded-lg">
                        "Get Started"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
