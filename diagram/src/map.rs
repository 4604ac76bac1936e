//! Metro-map domain model: stations, lines, and the id-keyed aggregate.
//!
//! Data flows into this layer from the network (JSON deserialization after
//! the wire-shape conversion in the host crate) and from the add-station
//! flow (local mutation before a full-map POST). The render-model builder
//! reads from [`MetroMap`] to derive nodes and edges.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A point of interest on the map, served by one or more lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique, stable station identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional blurb shown in detail surfaces.
    #[serde(default)]
    pub description: Option<String>,
    /// Horizontal position in view units.
    pub x: f64,
    /// Vertical position in view units.
    pub y: f64,
    /// Ids of the lines serving this station. Used only for color
    /// aggregation at the node; connectivity comes from [`Line::stations`].
    #[serde(default)]
    pub lines: Vec<String>,
    /// Whether the station is included in the render model. Client-only;
    /// a full refetch resets every station to visible.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// An ordered path of stations rendered as connected edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Unique line identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stroke/fill color token, passed through to the renderer as-is.
    pub color: String,
    /// Ordered station ids; each consecutive visible pair becomes an edge.
    #[serde(default)]
    pub stations: Vec<String>,
}

/// The aggregate of all stations and lines for one map instance.
///
/// Stations and lines are keyed by id for O(1) lookup. The map is replaced
/// wholesale on every successful fetch or mutation response; there is no
/// partial merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetroMap {
    /// Map instance identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional one-line summary from the backend.
    #[serde(default)]
    pub summary: Option<String>,
    /// All stations keyed by station id.
    #[serde(default)]
    pub stations: HashMap<String, Station>,
    /// All lines keyed by line id.
    #[serde(default)]
    pub lines: HashMap<String, Line>,
}

impl MetroMap {
    /// Look up a station by id.
    #[must_use]
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Whether the map has at least one line. The add-station flow is
    /// gated on this.
    #[must_use]
    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Whether a station id exists and is currently visible.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.stations.get(id).is_some_and(|s| s.visible)
    }
}
