//! Engine core: the map snapshot plus camera, separated from the browser
//! host so focus and capture behavior can be tested without WASM.
//!
//! The Leptos host owns the DOM surface and animation timing; it feeds
//! viewport sizes and pointer positions in and reads camera state out.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::consts::FOCUS_ZOOM;
use crate::map::MetroMap;

/// Core engine state for the map surface.
#[derive(Debug, Clone, Default)]
pub struct MapEngineCore {
    /// Current map snapshot; `None` until the first fetch lands.
    pub map: Option<MetroMap>,
    /// Pan/zoom camera over the map surface.
    pub camera: Camera,
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
}

impl MapEngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the map snapshot wholesale.
    pub fn set_map(&mut self, map: MetroMap) {
        self.map = Some(map);
    }

    /// Record the current viewport size.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Center the camera on a station at [`FOCUS_ZOOM`].
    ///
    /// Returns the world-space target when the camera moved, or `None`
    /// when the map is absent or the id is unknown — a silent no-op with
    /// no camera change.
    pub fn focus_station(&mut self, station_id: &str) -> Option<Point> {
        let station = self.map.as_ref()?.station(station_id)?;
        let target = Point::new(station.x, station.y);
        self.camera
            .center_on(target, self.viewport_width, self.viewport_height, FOCUS_ZOOM);
        Some(target)
    }

    /// Convert a pointer position on the surface to world coordinates.
    /// Used to capture the pending location during the add-station flow.
    #[must_use]
    pub fn capture_location(&self, screen: Point) -> Point {
        self.camera.screen_to_world(screen)
    }
}
