//! Cat page: a per-thread virtual cat with a transient speech bubble.

use leptos::prelude::*;

use crate::components::chat_host::ChatHost;
use crate::net::chatkit::WidgetOptions;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::CatPayload;
use crate::state::cat::CatState;

#[cfg(test)]
#[path = "cat_test.rs"]
mod cat_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

const CHATKIT_URL: &str = "/chatkit";
const DOMAIN_KEY: &str = "cat";

/// How long the speech bubble stays up.
#[cfg(feature = "hydrate")]
const SPEECH_MS: u32 = 4_000;

#[cfg(any(test, feature = "hydrate"))]
fn speech_line(cat: &CatPayload) -> String {
    if cat.energy <= 2 {
        "Zzz...".to_owned()
    } else if cat.happiness >= 8 {
        format!("{} is purring!", cat.name)
    } else {
        format!("Meow! I'm {}.", cat.name)
    }
}

#[cfg(feature = "hydrate")]
fn refetch_cat(cat_state: RwSignal<CatState>, speech_timer: Rc<RefCell<Option<Timeout>>>) {
    leptos::task::spawn_local(async move {
        let thread_id = cat_state.with_untracked(|state| state.thread_id.clone());
        match crate::net::api::fetch_cat(thread_id.as_deref()).await {
            Ok(cat) => {
                let line = speech_line(&cat);
                cat_state.update(|state| {
                    state.cat = cat;
                    state.speech = Some(line);
                });
                // Replacing the timeout cancels the previous one on drop.
                let timer = Timeout::new(SPEECH_MS, move || {
                    cat_state.update(|state| state.speech = None);
                });
                *speech_timer.borrow_mut() = Some(timer);
            }
            Err(err) => leptos::logging::warn!("cat fetch failed: {err}"),
        }
    });
}

/// Cat page.
#[component]
pub fn CatPage() -> impl IntoView {
    let cat_state = expect_context::<RwSignal<CatState>>();

    #[cfg(feature = "hydrate")]
    let speech_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        refetch_cat(cat_state, Rc::clone(&speech_timer));

        let speech_timer_cleanup = Rc::clone(&speech_timer);
        on_cleanup(move || {
            if let Some(timer) = speech_timer_cleanup.borrow_mut().take() {
                timer.cancel();
            }
        });
    }

    let on_thread_change = {
        #[cfg(feature = "hydrate")]
        {
            let speech_timer = Rc::clone(&speech_timer);
            Callback::new(move |thread_id: Option<String>| {
                cat_state.update(|state| state.thread_id = thread_id);
                refetch_cat(cat_state, Rc::clone(&speech_timer));
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(move |_thread_id: Option<String>| {})
        }
    };

    let widget_options = Signal::derive(move || {
        WidgetOptions::for_page(
            CHATKIT_URL,
            DOMAIN_KEY,
            false,
            "Say hi to the cat!",
            "Talk to the cat",
            &["Feed the cat", "Play with the cat"],
        )
    });

    let stat_row = |label: &'static str, value: Signal<i32>| {
        view! {
            <div class="cat-page__stat">
                <span class="cat-page__stat-label">{label}</span>
                <meter class="cat-page__stat-meter" min="0" max="10" value=move || value.get()>
                </meter>
                <span class="cat-page__stat-value">{move || value.get()}</span>
            </div>
        }
    };

    let energy = Signal::derive(move || cat_state.with(|state| state.cat.energy));
    let happiness = Signal::derive(move || cat_state.with(|state| state.cat.happiness));
    let cleanliness = Signal::derive(move || cat_state.with(|state| state.cat.cleanliness));

    view! {
        <div class="cat-page">
            <header class="cat-page__header">
                <h1>{move || cat_state.with(|state| state.cat.name.clone())}</h1>
                <span class="cat-page__age">
                    {move || cat_state.with(|state| format!("Age {}", state.cat.age))}
                </span>
            </header>

            <main class="cat-page__body">
                <div class="cat-page__portrait">
                    <Show when=move || cat_state.with(|state| state.speech.is_some())>
                        <div class="cat-page__speech">
                            {move || cat_state.with(|state| state.speech.clone().unwrap_or_default())}
                        </div>
                    </Show>
                    <div class="cat-page__figure" data-pattern=move || {
                        cat_state.with(|state| state.cat.color_pattern.clone().unwrap_or_default())
                    }>
                        "🐈"
                    </div>
                </div>

                <div class="cat-page__stats">
                    {stat_row("Energy", energy)}
                    {stat_row("Happiness", happiness)}
                    {stat_row("Cleanliness", cleanliness)}
                </div>

                <aside class="cat-page__chat">
                    <ChatHost options=widget_options on_thread_change=on_thread_change />
                </aside>
            </main>
        </div>
    }
}

