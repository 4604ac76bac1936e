//! Metro map page: the diagram surface, the add-station flow, and the chat
//! widget that drives the map through agent commands.

use leptos::prelude::*;

use crate::components::add_station_modal::AddStationModal;
use crate::components::chat_host::ChatHost;
use crate::components::map_host::MapHost;
use crate::net::chatkit::WidgetOptions;
use crate::state::map::{InteractionMode, MapState};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::station_actions::{blocking_alert, can_open_add_station};

const CHATKIT_URL: &str = "/chatkit";
const DOMAIN_KEY: &str = "metro-map";

/// Metro map page.
#[component]
pub fn MetroPage() -> impl IntoView {
    let map_state = expect_context::<RwSignal<MapState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let load_error = RwSignal::new(None::<String>);

    // Theme and initial map load on mount.
    Effect::new(move || {
        let dark = dark_mode::read_preference(dark_mode::METRO_THEME_KEY);
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let thread_id = map_state.with_untracked(|state| state.thread_id.clone());
            match crate::net::api::fetch_map(thread_id.as_deref()).await {
                Ok(map) => {
                    map_state.update(|state| state.set_map(map));
                    load_error.set(None);
                }
                Err(err) => {
                    leptos::logging::warn!("initial map fetch failed: {err}");
                    load_error.set(Some("Could not load the map.".to_owned()));
                }
            }
        });
    }

    let on_toggle_theme = move |_| {
        ui.update(|u| {
            u.dark_mode = dark_mode::toggle(dark_mode::METRO_THEME_KEY, u.dark_mode);
        });
    };

    let on_add_station = move |_| {
        let allowed = map_state.with_untracked(|state| can_open_add_station(state.map.as_ref()));
        match allowed {
            Ok(()) => ui.update(|u| {
                u.reset_add_station();
                u.add_station_open = true;
            }),
            Err(block) => blocking_alert(block.message()),
        }
    };

    // Abandon location capture and bring the form back.
    let on_cancel_pick = move |_| {
        map_state.update(MapState::exit_location_select);
        ui.update(|u| u.add_station_open = true);
    };

    let selecting =
        move || map_state.with(|state| state.mode == InteractionMode::LocationSelect);

    let widget_options = Signal::derive(move || {
        WidgetOptions::for_page(
            CHATKIT_URL,
            DOMAIN_KEY,
            ui.with(|u| u.dark_mode),
            "Where should the network grow next?",
            "Ask about the map",
            &["Add a station to the red line", "Which stations are selected?"],
        )
    });

    view! {
        <div class="metro-page">
            <header class="metro-page__header">
                <h1>{move || {
                    map_state.with(|state| {
                        state
                            .map
                            .as_ref()
                            .map_or_else(|| "Metro Map".to_owned(), |m| m.name.clone())
                    })
                }}</h1>
                <div class="metro-page__actions">
                    <button class="btn" on:click=on_add_station>"+ Add Station"</button>
                    <button class="btn" on:click=on_toggle_theme>
                        {move || if ui.with(|u| u.dark_mode) { "Light" } else { "Dark" }}
                    </button>
                </div>
            </header>

            <Show when=move || load_error.with(Option::is_some)>
                <p class="metro-page__error">
                    {move || load_error.get().unwrap_or_default()}
                </p>
            </Show>

            <Show when=selecting>
                <div class="metro-page__hint">
                    <span>"Click the map to place the new station."</span>
                    <button class="btn" on:click=on_cancel_pick>"Cancel"</button>
                </div>
            </Show>

            <main class="metro-page__body">
                <MapHost />
                <aside class="metro-page__chat">
                    <ChatHost options=widget_options />
                </aside>
            </main>

            <AddStationModal />
        </div>
    }
}
