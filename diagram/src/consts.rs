//! Shared numeric constants for the diagram crate.

// ── Coordinate scaling ──────────────────────────────────────────

/// Multiplier applied to raw backend station coordinates on fetch.
pub const COORD_SCALE: f64 = 150.0;

/// Horizontal offset added after scaling, in view units.
pub const COORD_OFFSET_X: f64 = 300.0;

/// Vertical offset added after scaling, in view units.
pub const COORD_OFFSET_Y: f64 = 400.0;

// ── Viewport focus ──────────────────────────────────────────────

/// Zoom level the camera settles at when focusing a station.
pub const FOCUS_ZOOM: f64 = 1.4;

/// Duration of the focus animation in milliseconds.
pub const FOCUS_DURATION_MS: f64 = 600.0;

// ── Rendering ───────────────────────────────────────────────────

/// Node color used when a station belongs to no resolvable line.
pub const FALLBACK_NODE_COLOR: &str = "#9ca3af";

/// Station marker radius in view units.
pub const STATION_RADIUS: f64 = 10.0;

/// Line edge stroke width in view units.
pub const EDGE_STROKE_WIDTH: f64 = 4.0;
