//! Modal for adding a station to an existing line.
//!
//! The form collects a name and a line, then hands off to the map surface
//! for location capture. Submission sends the full updated map to the
//! backend and only applies it locally once the backend confirms.

use leptos::prelude::*;

use crate::state::map::MapState;
use crate::state::ui::UiState;
use crate::util::station_actions::{AddStationBlock, blocking_alert};

#[cfg(feature = "hydrate")]
use crate::net::api::update_map;
#[cfg(feature = "hydrate")]
use crate::util::station_actions::{
    build_add_station_map, synthesize_station_id, validate_submission,
};

/// Add-station modal with name input, line picker, and location capture.
#[component]
pub fn AddStationModal() -> impl IntoView {
    let map_state = expect_context::<RwSignal<MapState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let submitting = RwSignal::new(false);

    let lines = move || {
        map_state.with(|state| {
            let Some(map) = state.map.as_ref() else {
                return Vec::new();
            };
            let mut entries: Vec<(String, String)> = map
                .lines
                .values()
                .map(|line| (line.id.clone(), line.name.clone()))
                .collect();
            entries.sort();
            entries
        })
    };

    let on_name_input = move |ev: leptos::ev::Event| {
        ui.update(|u| u.form.name = event_target_value(&ev));
    };

    let on_line_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ui.update(|u| {
            u.form.line_id = if value.is_empty() { None } else { Some(value) };
        });
    };

    // Hide the modal and let the map surface capture the next click.
    let on_pick_location = move |_ev: leptos::ev::MouseEvent| {
        let Some(line_id) = ui.with_untracked(|u| u.form.line_id.clone()) else {
            blocking_alert(AddStationBlock::MissingLine.message());
            return;
        };
        ui.update(|u| u.add_station_open = false);
        map_state.update(|state| state.enter_location_select(line_id));
    };

    let on_cancel = move |_ev: leptos::ev::MouseEvent| {
        ui.update(UiState::reset_add_station);
        map_state.update(MapState::exit_location_select);
    };

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                if submitting.get_untracked() {
                    return;
                }
                let (name, line_id) =
                    ui.with_untracked(|u| (u.form.name.clone(), u.form.line_id.clone()));
                let location = map_state.with_untracked(|state| state.pending_location);
                let input = match validate_submission(&name, line_id.as_deref(), location) {
                    Ok(input) => input,
                    Err(block) => {
                        blocking_alert(block.message());
                        return;
                    }
                };
                let Some(current) = map_state.with_untracked(|state| state.map.clone()) else {
                    return;
                };
                let station_id = synthesize_station_id(js_sys::Date::now());
                let Some(next) = build_add_station_map(&current, &input, &station_id) else {
                    blocking_alert(AddStationBlock::MissingLine.message());
                    return;
                };
                let thread_id = map_state.with_untracked(|state| state.thread_id.clone());
                submitting.set(true);
                leptos::task::spawn_local(async move {
                    match update_map(&next, thread_id.as_deref()).await {
                        Ok(saved) => {
                            map_state.update(|state| {
                                state.set_map(saved);
                                state.exit_location_select();
                            });
                            ui.update(UiState::reset_add_station);
                        }
                        Err(err) => {
                            leptos::logging::warn!("add station failed: {err}");
                            blocking_alert("Could not save the station. Please try again.");
                        }
                    }
                    submitting.set(false);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let location_label = move || {
        map_state.with(|state| {
            state.pending_location.map_or_else(
                || "No location picked yet".to_owned(),
                |(x, y)| format!("({x:.0}, {y:.0})"),
            )
        })
    };

    view! {
        <Show when=move || ui.with(|u| u.add_station_open)>
            <div class="dialog-backdrop">
                <div class="dialog dialog--add-station" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Add Station"</h2>

                    <label class="dialog__field">
                        <span class="dialog__field-label">"Name"</span>
                        <input
                            type="text"
                            placeholder="Station name"
                            prop:value=move || ui.with(|u| u.form.name.clone())
                            on:input=on_name_input
                        />
                    </label>

                    <label class="dialog__field">
                        <span class="dialog__field-label">"Line"</span>
                        <select
                            prop:value=move || {
                                ui.with(|u| u.form.line_id.clone().unwrap_or_default())
                            }
                            on:change=on_line_change
                        >
                            <option value="">"Choose a line"</option>
                            <For
                                each=lines
                                key=|(id, _)| id.clone()
                                children=|(id, name)| {
                                    view! { <option value=id>{name}</option> }
                                }
                            />
                        </select>
                    </label>

                    <div class="dialog__field">
                        <span class="dialog__field-label">"Location"</span>
                        <span class="dialog__field-value">{location_label}</span>
                        <button class="btn" on:click=on_pick_location>
                            "Pick on map"
                        </button>
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                        <button
                            class="btn btn--primary"
                            disabled=move || submitting.get()
                            on:click=on_submit
                        >
                            {move || if submitting.get() { "Saving…" } else { "Add Station" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
