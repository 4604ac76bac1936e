//! Pure render-model derivation: stations and lines in, nodes and edges out.
//!
//! These functions are deterministic and side-effect free. Because the map
//! aggregate keys stations and lines by id in hash maps, both builders sort
//! their output by id so the diagram surface renders stably across calls.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use std::collections::HashSet;

use crate::consts::FALLBACK_NODE_COLOR;
use crate::map::MetroMap;

/// A drawable station marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    /// Station id this node renders.
    pub id: String,
    /// Label text (the station name).
    pub label: String,
    /// Horizontal position in view units.
    pub x: f64,
    /// Vertical position in view units.
    pub y: f64,
    /// Colors of every resolvable line the station belongs to, in the
    /// station's own membership order. Never empty: a station with no
    /// resolvable line gets the single fallback gray.
    pub line_colors: Vec<String>,
    /// Whether the station is in the current selection set.
    pub selected: bool,
    /// Highlight color applied while the user is picking a location for a
    /// new station on a given line; `None` outside location-select mode.
    pub halo_color: Option<String>,
}

/// A drawable segment between two consecutive visible stations on a line.
///
/// Identity is a composite of the line id and both endpoint ids, so two
/// lines sharing the same station pair produce distinct parallel edges.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEdge {
    /// Synthesized identity: `"{line_id}:{from}->{to}"`.
    pub id: String,
    /// Line this edge belongs to.
    pub line_id: String,
    /// Stroke color token from the line.
    pub color: String,
    /// Station id at the start of the segment.
    pub from: String,
    /// Station id at the end of the segment.
    pub to: String,
    /// Start position in view units.
    pub x1: f64,
    /// Start position in view units.
    pub y1: f64,
    /// End position in view units.
    pub x2: f64,
    /// End position in view units.
    pub y2: f64,
}

/// Build the node list for the diagram surface.
///
/// Stations with `visible == false` are excluded. Line ids that no longer
/// resolve to a line are silently dropped from the color list; a station
/// left with no colors falls back to [`FALLBACK_NODE_COLOR`].
#[must_use]
pub fn build_nodes(
    map: &MetroMap,
    selected: &HashSet<String>,
    halo_color: Option<&str>,
) -> Vec<MapNode> {
    let mut nodes: Vec<MapNode> = map
        .stations
        .values()
        .filter(|station| station.visible)
        .map(|station| {
            let mut line_colors: Vec<String> = station
                .lines
                .iter()
                .filter_map(|line_id| map.line(line_id).map(|line| line.color.clone()))
                .collect();
            if line_colors.is_empty() {
                line_colors.push(FALLBACK_NODE_COLOR.to_owned());
            }
            MapNode {
                id: station.id.clone(),
                label: station.name.clone(),
                x: station.x,
                y: station.y,
                line_colors,
                selected: selected.contains(&station.id),
                halo_color: halo_color.map(str::to_owned),
            }
        })
        .collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    nodes
}

/// Build the edge list for the diagram surface.
///
/// Each line's ordered station sequence is first filtered to stations that
/// exist and are visible; one edge is then emitted per consecutive pair of
/// that filtered subsequence. Hiding an intermediate station therefore
/// bridges its visible neighbors rather than breaking the line.
#[must_use]
pub fn build_edges(map: &MetroMap) -> Vec<MapEdge> {
    let mut line_ids: Vec<&String> = map.lines.keys().collect();
    line_ids.sort();

    let mut edges = Vec::new();
    for line_id in line_ids {
        let Some(line) = map.line(line_id) else {
            continue;
        };
        let visible: Vec<&str> = line
            .stations
            .iter()
            .filter(|id| map.is_visible(id))
            .map(String::as_str)
            .collect();
        for pair in visible.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(a), Some(b)) = (map.station(from), map.station(to)) else {
                continue;
            };
            edges.push(MapEdge {
                id: format!("{}:{from}->{to}", line.id),
                line_id: line.id.clone(),
                color: line.color.clone(),
                from: from.to_owned(),
                to: to.to_owned(),
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
        }
    }
    edges
}
