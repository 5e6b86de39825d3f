//! "Ready to elevate your trading?" contact section with a simulated submission

use std::time::Duration;

use leptos::logging::{debug_warn, log};
use leptos::prelude::*;

use crate::core::{ContactForm, ExperienceLevel, SUBMIT_DELAY_MS, SubmissionStatus};
use crate::ui::common::Spinner;
use crate::ui::icon::{Icon, icons};

const LABEL_CLASS: &str = "block text-xs text-gray-400 uppercase tracking-wider mb-2";
const INPUT_CLASS: &str = "w-full bg-navy-900 border border-white/20 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-neon-blue transition-colors clickable";
const SELECT_CLASS: &str = "w-full bg-navy-900 border border-white/20 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-neon-blue transition-colors clickable appearance-none";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-navy-900 border-t border-white/10">
            <div class="container mx-auto px-6 max-w-4xl">
                <div class="glass-card p-8 md:p-12 rounded-2xl flex flex-col md:flex-row gap-12 items-center">
                    <div class="flex-1">
                        <h2 class="text-3xl font-display font-bold text-white mb-4">"Ready to elevate your trading?"</h2>
                        <p class="text-gray-400 mb-6">"Join 10,000+ traders using TradeNexus to beat the market."</p>
                        <div class="flex gap-4">
                            {[icons::TWITTER, icons::LINKEDIN, icons::FACEBOOK].into_iter().map(|icon| view! {
                                <div class="w-12 h-12 rounded-full bg-white/5 flex items-center justify-center text-gray-400 hover:text-white hover:bg-neon-blue/20 transition-all clickable">
                                    <Icon name=icon class="w-5 h-5" />
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="flex-1 w-full">
                        <EarlyAccessForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Form card. Shows the success panel once the simulated request completes.
#[component]
fn EarlyAccessForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    on_cleanup(move || {
        if let Some(handle) = timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let started = form.try_update(ContactForm::begin_submit);
        match started {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                debug_warn!("contact form not submitted: {}", err);
                return;
            }
            None => return,
        }

        log!(
            "submitting contact form for {}",
            form.with_untracked(|f| f.fields.email.clone())
        );

        let scheduled = set_timeout_with_handle(
            move || {
                timer.set_value(None);
                form.update(|f| {
                    f.complete_submit();
                });
            },
            Duration::from_millis(SUBMIT_DELAY_MS),
        );
        match scheduled {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => debug_warn!("could not schedule submission: {:?}", err),
        }
    };

    let is_success = move || form.with(|f| f.status() == SubmissionStatus::Success);

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Show
                when=is_success
                fallback=move || view! {
                    <div>
                        <label for="contact-name" class=LABEL_CLASS>"Full Name"</label>
                        <input
                            id="contact-name"
                            type="text"
                            required
                            class=INPUT_CLASS
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.fields.name.clone())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                        />
                    </div>

                    <div>
                        <label for="contact-email" class=LABEL_CLASS>"Email Address"</label>
                        <input
                            id="contact-email"
                            type="email"
                            required
                            class=INPUT_CLASS
                            placeholder="john@example.com"
                            prop:value=move || form.with(|f| f.fields.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </div>

                    <div>
                        <label for="contact-level" class=LABEL_CLASS>"Experience"</label>
                        <select
                            id="contact-level"
                            class=SELECT_CLASS
                            prop:value=move || form.with(|f| f.fields.level.as_str())
                            on:change=move |ev| {
                                if let Some(level) = ExperienceLevel::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.set_level(level));
                                }
                            }
                        >
                            {ExperienceLevel::ALL.into_iter().map(|level| view! {
                                <option value=level.as_str()>{level.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.is_busy())
                        class="w-full bg-gradient-to-r from-neon-blue to-neon-purple text-navy-900 font-bold py-3 rounded-lg hover:shadow-[0_0_20px_rgba(0,240,255,0.3)] transition-all clickable flex justify-center items-center"
                    >
                        <Show
                            when=move || form.with(|f| f.is_busy())
                            fallback=|| "Get Early Access"
                        >
                            <Spinner size="w-5 h-5" class="text-navy-900" />
                        </Show>
                    </button>
                }
            >
                <div class="bg-green-500/20 border border-green-500/50 p-6 rounded-lg text-center">
                    <Icon name=icons::CHECK class="w-10 h-10 mx-auto text-green-400 mb-2" />
                    <h3 class="text-white font-bold text-xl">"Welcome Aboard!"</h3>
                    <p class="text-gray-300">"We've sent a starter guide to your email."</p>
                    <button
                        type="button"
                        class="mt-4 text-sm text-green-400 underline clickable"
                        on:click=move |_| form.update(ContactForm::send_another)
                    >
                        "Send another"
                    </button>
                </div>
            </Show>
        </form>
    }
}
