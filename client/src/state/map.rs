//! Map-session state for the metro workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the canonical client-side holder of one map: the id-keyed
//! aggregate last returned by the backend, plus purely local interaction
//! state (selection, location-select mode, viewport focus requests). It is
//! created once per application session as an `RwSignal<MapState>` context
//! and mutated synchronously; all asynchrony lives in `net::api` callers.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::collections::HashSet;

use diagram::map::MetroMap;

/// Whether map-surface clicks select stations or place a pending station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Clicks toggle station selection.
    #[default]
    Default,
    /// The next map click captures a location for the add-station flow.
    LocationSelect,
}

/// Map state: the current map, thread binding, selection, and mode.
#[derive(Clone, Debug, Default)]
pub struct MapState {
    /// Last map returned by the backend; `None` until the first fetch.
    pub map: Option<MetroMap>,
    /// Conversation thread the map is scoped to, if any.
    pub thread_id: Option<String>,
    /// Currently selected station ids. Local-only, never persisted.
    pub selection: HashSet<String>,
    /// Current map-surface click behavior.
    pub mode: InteractionMode,
    /// Line the pending station will be added to while in location-select.
    pub location_select_line: Option<String>,
    /// World-space location captured by the last location-select click.
    pub pending_location: Option<(f64, f64)>,
    /// Monotonic counter bumped for each viewport-focus request.
    pub focus_seq: u64,
    /// Station to center the viewport on for the current `focus_seq`.
    pub focus_station_id: Option<String>,
}

impl MapState {
    /// Replace the map wholesale with the server's return value.
    pub fn set_map(&mut self, map: MetroMap) {
        self.map = Some(map);
    }

    /// Replace the full selected-id set. Toggle-by-presence is a caller
    /// concern.
    pub fn set_selection(&mut self, ids: Vec<String>) {
        self.selection = ids.into_iter().collect();
    }

    /// Enter location-select mode for a line.
    pub fn enter_location_select(&mut self, line_id: String) {
        self.mode = InteractionMode::LocationSelect;
        self.location_select_line = Some(line_id);
    }

    /// Leave location-select mode, clearing the line context and any
    /// captured location. Used by explicit cancellation.
    pub fn exit_location_select(&mut self) {
        self.mode = InteractionMode::Default;
        self.location_select_line = None;
        self.pending_location = None;
    }

    /// Record a picked location and return to default mode, keeping the
    /// line context so the form can submit.
    pub fn capture_location(&mut self, x: f64, y: f64) {
        self.pending_location = Some((x, y));
        self.mode = InteractionMode::Default;
    }

    /// Ask the map host to center the viewport on a station. The host
    /// watches `focus_seq`; an unknown id is a silent no-op downstream.
    pub fn request_focus(&mut self, station_id: String) {
        self.focus_seq += 1;
        self.focus_station_id = Some(station_id);
    }

    /// Color of the location-select line, used as a node halo while the
    /// user is picking a spot. `None` outside location-select mode.
    #[must_use]
    pub fn location_select_color(&self) -> Option<String> {
        if self.mode != InteractionMode::LocationSelect {
            return None;
        }
        let line_id = self.location_select_line.as_deref()?;
        self.map
            .as_ref()
            .and_then(|m| m.line(line_id))
            .map(|l| l.color.clone())
    }
}
