//! FAQ accordion; at most one answer is expanded

use leptos::prelude::*;

use crate::core::{Accordion, FAQ_ITEMS};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(FAQ_ITEMS.len()));

    view! {
        <section class="py-24">
            <div class="container mx-auto px-6 max-w-3xl">
                <h2 class="font-display text-3xl font-bold mb-12 text-center">"Frequently Asked Questions"</h2>
                <div class="space-y-4">
                    {FAQ_ITEMS.iter().enumerate().map(|(index, item)| {
                        let is_open = move || accordion.with(|a| a.is_open(index));
                        let answer_id = format!("faq-answer-{}", index);

                        view! {
                            <div class="glass-card rounded-xl overflow-hidden">
                                <button
                                    class="w-full px-6 py-4 text-left flex justify-between items-center focus:outline-none clickable"
                                    on:click=move |_| accordion.update(|a| a.toggle(index))
                                    aria-expanded=move || is_open().to_string()
                                    aria-controls=answer_id.clone()
                                >
                                    <span class="font-medium text-lg">{item.question}</span>
                                    <span
                                        class="transition-transform duration-300 text-gray-400"
                                        class:rotate-180=is_open
                                    >
                                        <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                                    </span>
                                </button>
                                <div
                                    id=answer_id
                                    class="px-6 text-gray-400 overflow-hidden transition-all duration-300 ease-in-out"
                                    class:max-h-0=move || !is_open()
                                    class:max-h-48=is_open
                                    class:pb-6=is_open
                                >
                                    {item.answer}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
