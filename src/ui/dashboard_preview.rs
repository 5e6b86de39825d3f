//! Interactive dashboard mock-up with three tabbed panels

use leptos::prelude::*;

use crate::core::{ACTIVE_SIGNALS, CHART_DATA, DashboardTab, PositionSide, SIGNAL_CARDS, SignalCard};
use crate::ui::chart::{AreaChart, BarChart};
use crate::ui::common::{TabItem, Tabs};

/// AI confidence shown by the overview meter, out of 10
const CONFIDENCE_SCORE: f64 = 8.9;

#[component]
pub fn DashboardPreview() -> impl IntoView {
    let active = RwSignal::new(DashboardTab::default());

    let tabs: Vec<TabItem> = DashboardTab::ALL
        .iter()
        .map(|tab| TabItem::new(tab.id(), tab.label()))
        .collect();

    let on_change = Callback::new(move |id: &'static str| {
        if let Some(tab) = DashboardTab::from_id(id) {
            active.set(tab);
        }
    });

    view! {
        <section id="demo" class="py-24 bg-navy-800/50">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-end mb-12 gap-6">
                    <div>
                        <h2 class="font-display text-3xl md:text-5xl font-bold text-white mb-4">"Live Market Intelligence"</h2>
                        <p class="text-gray-400 max-w-md">"Experience the power of real-time AI analytics. Customize your dashboard to focus on what matters most."</p>
                    </div>
                    <Tabs
                        tabs=tabs
                        active_tab=Signal::derive(move || active.get().id())
                        on_change=on_change
                    />
                </div>

                <div class="glass-card rounded-2xl overflow-hidden border border-white/10 shadow-2xl">
                    // Window chrome
                    <div class="bg-navy-900/50 p-4 border-b border-white/10 flex justify-between items-center">
                        <div class="flex items-center gap-4">
                            <div class="w-3 h-3 rounded-full bg-red-500"></div>
                            <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                            <div class="w-3 h-3 rounded-full bg-green-500"></div>
                        </div>
                        <div class="text-xs text-gray-500 font-mono">"LIVE_FEED_V2.CONNECT"</div>
                    </div>

                    <DashboardPanel active=active />
                </div>
            </div>
        </section>
    }
}

/// Body of the dashboard; only the active tab's panel is mounted
#[component]
fn DashboardPanel(#[prop(into)] active: Signal<DashboardTab>) -> impl IntoView {
    view! {
        <div
            class="p-8 min-h-[500px]"
            role="tabpanel"
            id=move || format!("panel-{}", active.get().id())
        >
            {move || match active.get() {
                DashboardTab::Overview => view! { <OverviewPanel /> }.into_any(),
                DashboardTab::Signals => view! { <SignalsPanel /> }.into_any(),
                DashboardTab::Performance => view! { <PerformancePanel /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewPanel() -> impl IntoView {
    let meter_width = format!("width: {:.0}%", CONFIDENCE_SCORE * 10.0);

    view! {
        <div class="grid lg:grid-cols-3 gap-6 h-full">
            <div class="lg:col-span-2 bg-white/5 rounded-xl p-4 border border-white/5">
                <div class="flex justify-between mb-4">
                    <h3 class="font-bold">"Portfolio Value"</h3>
                    <span class="text-neon-green text-sm">"+12.4%"</span>
                </div>
                <AreaChart
                    points=CHART_DATA
                    color="#b900ff"
                    gradient_id="overview-value"
                    axes=true
                    class="h-[350px] w-full"
                />
            </div>

            <div class="space-y-4">
                <div class="bg-white/5 rounded-xl p-4 border border-white/5">
                    <h4 class="text-gray-400 text-sm mb-2">"AI Confidence Score"</h4>
                    <div class="flex items-end gap-2">
                        <span class="text-4xl font-bold text-neon-blue">{format!("{:.1}", CONFIDENCE_SCORE)}</span>
                        <span class="text-gray-500 mb-1">"/ 10"</span>
                    </div>
                    <div class="w-full bg-gray-700 h-2 rounded-full mt-3 overflow-hidden">
                        <div class="bg-neon-blue h-full" style=meter_width></div>
                    </div>
                </div>

                <div class="bg-white/5 rounded-xl p-4 border border-white/5">
                    <h4 class="text-gray-400 text-sm mb-4">"Active Signals"</h4>
                    <div class="space-y-3">
                        {ACTIVE_SIGNALS.iter().map(|signal| view! {
                            <div class="flex justify-between items-center p-2 rounded hover:bg-white/5 transition-colors">
                                <div class="flex items-center gap-3">
                                    <div
                                        class="w-8 h-8 rounded bg-white/5 flex items-center justify-center font-bold"
                                        class:text-green-400={signal.side == PositionSide::Long}
                                        class:text-red-400={signal.side == PositionSide::Short}
                                    >
                                        {signal.side.badge()}
                                    </div>
                                    <div>
                                        <p class="font-bold text-sm">{signal.symbol}</p>
                                        <p class="text-xs text-gray-500">"Entry: " {signal.entry}</p>
                                    </div>
                                </div>
                                <span class="text-xs px-2 py-1 bg-white/5 rounded text-gray-300">"Active"</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignalsPanel() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {SIGNAL_CARDS.iter().map(|card| view! { <SignalSetup card=*card /> }).collect_view()}
        </div>
    }
}

#[component]
fn SignalSetup(card: SignalCard) -> impl IntoView {
    view! {
        <div class="bg-white/5 p-4 rounded-lg border border-white/5 hover:border-neon-blue/30 transition-all">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <span class="text-xs font-bold bg-green-500/20 text-green-400 px-2 py-1 rounded">{card.verdict}</span>
                    <h4 class="font-bold mt-2 text-lg">{card.pair}</h4>
                </div>
                <span class="text-xs text-gray-400">{card.age}</span>
            </div>
            <div class="space-y-2 text-sm">
                <div class="flex justify-between">
                    <span class="text-gray-400">"Entry Zone"</span>
                    <span>{card.entry_zone}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"Take Profit"</span>
                    <span class="text-neon-green">{card.take_profit}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"Stop Loss"</span>
                    <span class="text-red-400">{card.stop_loss}</span>
                </div>
            </div>
            <button class="w-full mt-4 py-2 bg-neon-blue/10 text-neon-blue text-sm font-bold rounded hover:bg-neon-blue hover:text-navy-900 transition-colors clickable">
                "Execute Trade"
            </button>
        </div>
    }
}

#[component]
fn PerformancePanel() -> impl IntoView {
    view! {
        <div class="h-96">
            <BarChart points=CHART_DATA class="h-full w-full" />
        </div>
    }
}
