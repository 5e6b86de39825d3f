//! Hero section with pointer parallax

use leptos::prelude::*;

use crate::core::{CHART_DATA, ParallaxOffset};
use crate::ui::chart::AreaChart;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Hero() -> impl IntoView {
    let offset = RwSignal::new(ParallaxOffset::default());

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((width, height)) = crate::ui::dom::viewport_size() {
                offset.set(ParallaxOffset::from_pointer(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    width,
                    height,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <section
            class="relative min-h-screen pt-32 pb-20 flex items-center overflow-hidden"
            on:mousemove=on_mouse_move
        >
            // Background ambience
            <div class="absolute top-0 left-0 w-full h-full overflow-hidden -z-10" aria-hidden="true">
                <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-neon-purple/20 rounded-full blur-[120px] animate-pulse-slow"></div>
                <div class="absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bg-neon-blue/20 rounded-full blur-[120px] animate-pulse-slow" style="animation-delay: 2s"></div>
                <div class="absolute top-[20%] right-[20%] w-[20%] h-[20%] bg-neon-green/10 rounded-full blur-[100px]"></div>
            </div>

            <div class="container mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                // Text layer moves against the pointer
                <div class="relative z-10" style=move || offset.with(|o| o.text_transform())>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/5 border border-white/10 mb-6 backdrop-blur-sm">
                        <span class="w-2 h-2 rounded-full bg-neon-green animate-pulse"></span>
                        <span class="text-neon-green text-xs font-semibold tracking-wide uppercase">"AI Engine v2.5 Online"</span>
                    </div>

                    <h1 class="font-display text-5xl md:text-7xl font-bold leading-[1.1] mb-6 text-white">
                        "Trade Smarter. " <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-neon-blue to-neon-purple">
                            "Trade with Clarity."
                        </span>
                    </h1>

                    <p class="text-lg text-gray-400 mb-8 max-w-xl leading-relaxed">
                        "Harness the power of institutional-grade AI to analyze market trends, execute trades with precision, and eliminate emotional bias from your strategy."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <button class="px-8 py-4 bg-gradient-to-r from-neon-blue to-neon-purple text-navy-900 font-bold rounded-lg hover:shadow-[0_0_30px_rgba(0,240,255,0.4)] transition-all transform hover:-translate-y-1 clickable flex items-center justify-center gap-2">
                            "Start Trading with AI"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </button>
                        <a
                            href="#demo"
                            class="px-8 py-4 bg-transparent border border-white/20 text-white font-medium rounded-lg hover:bg-white/5 hover:border-white/40 transition-all clickable text-center"
                        >
                            "View Live Demo"
                        </a>
                    </div>

                    <div class="mt-12 flex items-center gap-8">
                        <HeroStat value="93%" label="Prediction Accuracy" />
                        <div class="w-px h-10 bg-white/10"></div>
                        <HeroStat value="$2.4B+" label="Volume Processed" />
                    </div>
                </div>

                // Visualizer layer follows the pointer at half speed
                <div class="relative z-10 hidden lg:block" style=move || offset.with(|o| o.visualizer_transform())>
                    <div class="glass-card rounded-2xl p-6 relative animate-float">
                        <div class="absolute top-0 right-0 p-4">
                            <div class="flex items-center gap-2 px-3 py-1 bg-green-500/20 rounded text-green-400 text-xs font-bold border border-green-500/30">
                                <Icon name=icons::TRENDING_UP class="w-3 h-3" />
                                "+2.4%"
                            </div>
                        </div>

                        <div class="mb-6 flex items-center gap-4">
                            <div class="w-12 h-12 rounded-full bg-white/10 flex items-center justify-center">
                                <Icon name=icons::CPU class="w-6 h-6 text-neon-blue" />
                            </div>
                            <div>
                                <h3 class="font-bold text-white">"BTC/USD Analysis"</h3>
                                <p class="text-xs text-gray-400">"AI Confidence: 94.2%"</p>
                            </div>
                        </div>

                        <AreaChart
                            points=CHART_DATA
                            color="#00f0ff"
                            gradient_id="hero-value"
                            class="h-64 w-full"
                        />

                        // Decorative AI nodes
                        <div class="flex justify-between mt-4 px-4" aria-hidden="true">
                            {(1..=3).map(|i| view! {
                                <div class="flex flex-col items-center gap-2">
                                    <div
                                        class="w-2 h-2 rounded-full bg-neon-purple animate-pulse"
                                        style=format!("animation-delay: {:.1}s", f64::from(i) * 0.2)
                                    ></div>
                                    <div class="w-px h-8 bg-gradient-to-b from-neon-purple/50 to-transparent"></div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    // Floating signal card
                    <div class="absolute -top-10 -right-10 glass-card p-4 rounded-xl animate-float" style="animation-delay: 1s">
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-green-500/20 rounded-lg text-green-400">
                                <Icon name=icons::CHECK class="w-4 h-4" />
                            </div>
                            <div>
                                <p class="text-xs text-gray-400">"Buy Signal"</p>
                                <p class="font-bold text-white">"ETH @ $2,450"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <p class="text-3xl font-display font-bold text-white">{value}</p>
            <p class="text-xs text-gray-500 uppercase tracking-wider">{label}</p>
        </div>
    }
}
