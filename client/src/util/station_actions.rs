//! Add-station flow helpers: precondition checks, validation, and the
//! full-map delta sent to the backend.
//!
//! The flow is pessimistic by design: nothing is drawn until the POST
//! round trip returns, at which point the server's echo becomes the new
//! canonical map. These helpers are pure so the whole flow short of the
//! network call is testable on the host.

#[cfg(test)]
#[path = "station_actions_test.rs"]
mod station_actions_test;

use diagram::map::{MetroMap, Station};

/// Why the add-station flow refused to advance. Surfaced to the user as a
/// blocking alert, never sent over the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddStationBlock {
    /// The map has no lines to attach a station to.
    NoLines,
    /// The station name is empty after trimming.
    MissingName,
    /// No line was chosen in the form.
    MissingLine,
    /// No location was captured on the map surface.
    MissingLocation,
}

impl AddStationBlock {
    /// User-facing alert text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoLines => "Create a line first — a station must belong to a line.",
            Self::MissingName => "Give the station a name.",
            Self::MissingLine => "Choose a line for the station.",
            Self::MissingLocation => "Pick a location on the map first.",
        }
    }
}

/// Validated input for one new station.
#[derive(Clone, Debug, PartialEq)]
pub struct NewStationInput {
    pub name: String,
    pub line_id: String,
    pub x: f64,
    pub y: f64,
}

/// Gate for opening the add-station modal: at least one line must exist.
///
/// # Errors
///
/// `NoLines` when the map is absent or has no lines.
pub fn can_open_add_station(map: Option<&MetroMap>) -> Result<(), AddStationBlock> {
    if map.is_some_and(MetroMap::has_lines) {
        Ok(())
    } else {
        Err(AddStationBlock::NoLines)
    }
}

/// Validate the form before any network call.
///
/// # Errors
///
/// The first unmet precondition, checked in form order: name, line,
/// location.
pub fn validate_submission(
    name: &str,
    line_id: Option<&str>,
    location: Option<(f64, f64)>,
) -> Result<NewStationInput, AddStationBlock> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AddStationBlock::MissingName);
    }
    let Some(line_id) = line_id else {
        return Err(AddStationBlock::MissingLine);
    };
    let Some((x, y)) = location else {
        return Err(AddStationBlock::MissingLocation);
    };
    Ok(NewStationInput {
        name: name.to_owned(),
        line_id: line_id.to_owned(),
        x,
        y,
    })
}

/// Client-generated station id from the current timestamp.
#[must_use]
pub fn synthesize_station_id(now_ms: f64) -> String {
    format!("station-{}", now_ms.max(0.0) as u64)
}

/// Build the full map sent to the backend: every existing station and
/// line, plus the new station appended to the end of its line's sequence.
///
/// Returns `None` when the chosen line no longer exists in the map (a
/// stale form against a newer fetch); callers treat that as a validation
/// failure.
#[must_use]
pub fn build_add_station_map(
    map: &MetroMap,
    input: &NewStationInput,
    station_id: &str,
) -> Option<MetroMap> {
    let mut next = map.clone();
    let line = next.lines.get_mut(&input.line_id)?;
    line.stations.push(station_id.to_owned());
    next.stations.insert(
        station_id.to_owned(),
        Station {
            id: station_id.to_owned(),
            name: input.name.clone(),
            description: None,
            x: input.x,
            y: input.y,
            lines: vec![input.line_id.clone()],
            visible: true,
        },
    );
    Some(next)
}

/// Show a blocking alert. Outside the browser this is a no-op.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
