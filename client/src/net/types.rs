//! Wire DTOs for the backend HTTP boundary.
//!
//! DESIGN
//! ======
//! The backend returns the metro map array-shaped (`stations: [...]`,
//! `lines: [...]`) with raw, unscaled coordinates. The client model keys
//! both collections by id and works in view units, so conversion happens
//! exactly once, here, on the way in. Update responses echo the id-keyed
//! client shape and are deserialized directly as [`MetroMap`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use diagram::consts::{COORD_OFFSET_X, COORD_OFFSET_Y, COORD_SCALE};
use diagram::map::{Line, MetroMap, Station};
use serde::{Deserialize, Serialize};

/// A station as the backend's GET endpoint serializes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw backend coordinate, pre-scaling.
    pub x: f64,
    /// Raw backend coordinate, pre-scaling.
    pub y: f64,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// A line as the backend's GET endpoint serializes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePayload {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub stations: Vec<String>,
}

/// The array-shaped map record inside a GET response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub stations: Vec<StationPayload>,
    #[serde(default)]
    pub lines: Vec<LinePayload>,
}

impl MapPayload {
    /// Convert the wire shape into the id-keyed client model.
    ///
    /// Applies the fixed coordinate transform (`view = raw * scale +
    /// offset`) and marks every station visible, which intentionally
    /// discards any client-only visibility toggles on refetch.
    #[must_use]
    pub fn into_model(self) -> MetroMap {
        let mut map = MetroMap {
            id: self.id,
            name: self.name,
            summary: self.summary,
            ..MetroMap::default()
        };
        for station in self.stations {
            map.stations.insert(
                station.id.clone(),
                Station {
                    id: station.id,
                    name: station.name,
                    description: station.description,
                    x: station.x * COORD_SCALE + COORD_OFFSET_X,
                    y: station.y * COORD_SCALE + COORD_OFFSET_Y,
                    lines: station.lines,
                    visible: true,
                },
            );
        }
        for line in self.lines {
            map.lines.insert(
                line.id.clone(),
                Line {
                    id: line.id,
                    name: line.name,
                    color: line.color,
                    stations: line.stations,
                },
            );
        }
        map
    }
}

/// Envelope of `GET /metro-map/map`.
#[derive(Clone, Debug, Deserialize)]
pub struct MapEnvelope {
    #[serde(default)]
    pub map: Option<MapPayload>,
}

/// Envelope of the `POST /metro-map/map` response, which mirrors the
/// id-keyed request body.
#[derive(Clone, Debug, Deserialize)]
pub struct MapModelEnvelope {
    #[serde(default)]
    pub map: Option<MetroMap>,
}

/// Body of `POST /metro-map/map` — the full map, replaced wholesale.
#[derive(Clone, Debug, Serialize)]
pub struct MapUpdateBody<'a> {
    pub map: &'a MetroMap,
}

/// A news article. List responses omit `content`; the detail endpoint
/// fills it in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Envelope of `GET /news/articles`.
#[derive(Clone, Debug, Deserialize)]
pub struct ArticlesEnvelope {
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Cat status snapshot as served by `GET /cat/cat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatPayload {
    pub name: String,
    pub energy: i32,
    pub happiness: i32,
    pub cleanliness: i32,
    pub age: i32,
    #[serde(default)]
    pub color_pattern: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

impl CatPayload {
    /// The backend's initial-context cat, used locally whenever no thread
    /// id is known — no network call involved.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            name: "Unnamed Cat".to_owned(),
            energy: 6,
            happiness: 6,
            cleanliness: 6,
            age: 2,
            color_pattern: None,
            updated_at: None,
            thread_id: None,
        }
    }
}

/// Envelope of `GET /cat/cat`.
#[derive(Clone, Debug, Deserialize)]
pub struct CatEnvelope {
    #[serde(default)]
    pub cat: Option<CatPayload>,
}
