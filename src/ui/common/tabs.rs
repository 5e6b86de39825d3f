use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Segmented tab strip. Panels are rendered by the caller.
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    #[prop(into)]
    active_tab: Signal<&'static str>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex p-1 bg-white/5 rounded-lg border border-white/10" role="tablist">
            {tabs.into_iter().map(|tab| {
                let id = tab.id;
                let is_active = Signal::derive(move || active_tab.get() == id);

                let tab_class = move || {
                    if is_active.get() {
                        "px-6 py-2 rounded-md text-sm font-medium transition-all clickable bg-neon-blue text-navy-900 shadow-lg"
                    } else {
                        "px-6 py-2 rounded-md text-sm font-medium transition-all clickable text-gray-400 hover:text-white"
                    }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| on_change.run(id)
                        role="tab"
                        aria-selected=move || is_active.get().to_string()
                        aria-controls=format!("panel-{}", id)
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
