//! Typed command surface for the embedded chat widget.
//!
//! DESIGN
//! ======
//! The widget is a black box that asks the client questions ("client tool
//! calls") and pushes notifications ("effects"). Instead of open-ended
//! callbacks, everything it can say is parsed into the closed
//! [`AgentCommand`] set and matched exhaustively; unknown commands parse to
//! `None` and are logged by the dispatcher, never executed dynamically.

#[cfg(test)]
#[path = "chatkit_test.rs"]
mod chatkit_test;

use diagram::map::MetroMap;
use serde::Serialize;

use super::types::MapPayload;
use crate::state::map::MapState;

/// A question the widget asks the client to answer synchronously.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientToolCall {
    /// "Which stations are currently selected on the map?"
    GetSelectedStations,
}

/// A fire-and-forget notification asking the client to change local UI
/// state or to refresh map state the backend has mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientEffect {
    /// The agent added a station; carries the new station id and, when the
    /// backend included it, the fresh map (array-shaped, raw coordinates).
    AddStation {
        station_id: String,
        map: Option<MetroMap>,
    },
    /// Backend-side map state changed in some unspecified way; refetch.
    RefreshMap,
    /// Start the click-to-place flow for a line.
    EnterLocationSelect { line_id: String },
    /// Abandon the click-to-place flow.
    ExitLocationSelect,
}

/// Everything the chat widget can tell the client, as one closed set.
#[derive(Clone, Debug, PartialEq)]
pub enum AgentCommand {
    ToolCall(ClientToolCall),
    Effect(ClientEffect),
    /// The active conversation changed; map state is keyed by thread.
    ThreadChange { thread_id: Option<String> },
}

/// Parse a named widget command and its JSON payload into a typed command.
///
/// Returns `None` for unknown names or payloads missing required fields.
#[must_use]
pub fn parse_command(name: &str, data: &serde_json::Value) -> Option<AgentCommand> {
    match name {
        "get_selected_stations" => Some(AgentCommand::ToolCall(ClientToolCall::GetSelectedStations)),
        "add_station" => {
            let station_id = data.get("station_id")?.as_str()?.to_owned();
            let map = data
                .get("map")
                .and_then(|v| serde_json::from_value::<MapPayload>(v.clone()).ok())
                .map(MapPayload::into_model);
            Some(AgentCommand::Effect(ClientEffect::AddStation { station_id, map }))
        }
        "refresh_map" => Some(AgentCommand::Effect(ClientEffect::RefreshMap)),
        "enter_location_select" => {
            let line_id = data.get("line_id")?.as_str()?.to_owned();
            Some(AgentCommand::Effect(ClientEffect::EnterLocationSelect { line_id }))
        }
        "exit_location_select" => Some(AgentCommand::Effect(ClientEffect::ExitLocationSelect)),
        "thread_change" => {
            let thread_id = data
                .get("thread_id")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned);
            Some(AgentCommand::ThreadChange { thread_id })
        }
        _ => None,
    }
}

/// Minimal station projection returned to the widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationRef {
    pub id: String,
    pub name: String,
}

/// Answer a client tool call from local state.
///
/// `get_selected_stations` projects the selection into id/name pairs,
/// sorted by id; ids whose station no longer exists are dropped from the
/// named list but kept in `station_ids`.
#[must_use]
pub fn answer_tool_call(
    call: ClientToolCall,
    map: Option<&MetroMap>,
    selection: &std::collections::HashSet<String>,
) -> serde_json::Value {
    match call {
        ClientToolCall::GetSelectedStations => {
            let mut station_ids: Vec<&String> = selection.iter().collect();
            station_ids.sort();
            let stations: Vec<StationRef> = station_ids
                .iter()
                .filter_map(|id| {
                    map.and_then(|m| m.station(id)).map(|s| StationRef {
                        id: s.id.clone(),
                        name: s.name.clone(),
                    })
                })
                .collect();
            serde_json::json!({ "station_ids": station_ids, "stations": stations })
        }
    }
}

/// Apply an effect to the map store. Returns `true` when the caller must
/// refetch the map from the backend.
pub fn apply_effect(effect: ClientEffect, state: &mut MapState) -> bool {
    match effect {
        ClientEffect::AddStation { station_id, map } => {
            let had_map = map.is_some();
            if let Some(map) = map {
                state.set_map(map);
            }
            state.request_focus(station_id);
            !had_map
        }
        ClientEffect::RefreshMap => true,
        ClientEffect::EnterLocationSelect { line_id } => {
            state.enter_location_select(line_id);
            false
        }
        ClientEffect::ExitLocationSelect => {
            state.exit_location_select();
            false
        }
    }
}

/// Configuration slots recognized by the embedded widget. Each page
/// supplies its own values; these slots and their effects are the entire
/// contract with that subsystem.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub api: WidgetApiOptions,
    pub theme: WidgetThemeOptions,
    pub start_screen: WidgetStartScreen,
    pub composer: WidgetComposer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetApiOptions {
    pub url: String,
    pub domain_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetThemeOptions {
    pub density: String,
    pub color_scheme: String,
    pub radius: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStartScreen {
    pub greeting: String,
    pub prompts: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetComposer {
    pub placeholder: String,
}

impl WidgetOptions {
    /// Options for a page's widget instance, themed to the current scheme.
    #[must_use]
    pub fn for_page(url: &str, domain_key: &str, dark: bool, greeting: &str, placeholder: &str, prompts: &[&str]) -> Self {
        Self {
            api: WidgetApiOptions {
                url: url.to_owned(),
                domain_key: domain_key.to_owned(),
            },
            theme: WidgetThemeOptions {
                density: "normal".to_owned(),
                color_scheme: if dark { "dark".to_owned() } else { "light".to_owned() },
                radius: "round".to_owned(),
            },
            start_screen: WidgetStartScreen {
                greeting: greeting.to_owned(),
                prompts: prompts.iter().map(|&p| p.to_owned()).collect(),
            },
            composer: WidgetComposer {
                placeholder: placeholder.to_owned(),
            },
        }
    }
}
