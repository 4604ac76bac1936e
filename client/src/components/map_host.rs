//! Bridge component between Leptos state and the `diagram` render model.
//!
//! Renders the metro map as SVG: edges from [`diagram::view_model::build_edges`],
//! nodes from [`diagram::view_model::build_nodes`], positioned by a
//! [`MapEngineCore`] camera. Focus requests and location capture flow through
//! the shared `MapState` signal.

use leptos::prelude::*;

use diagram::consts::{EDGE_STROKE_WIDTH, FOCUS_DURATION_MS, STATION_RADIUS};
use diagram::engine::MapEngineCore;
use diagram::view_model::{MapEdge, MapNode, build_edges, build_nodes};

use crate::state::map::{InteractionMode, MapState};
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use diagram::camera::Point;

/// Fixed SVG viewport, matching the page layout.
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Ring spacing for stations served by more than one line.
const RING_STEP: f64 = 4.0;

fn edge_view(edge: MapEdge) -> impl IntoView {
    view! {
        <line
            class="map-edge"
            x1=edge.x1
            y1=edge.y1
            x2=edge.x2
            y2=edge.y2
            stroke=edge.color
            stroke-width=EDGE_STROKE_WIDTH
            stroke-linecap="round"
        />
    }
}

fn node_view(node: MapNode, map_state: RwSignal<MapState>) -> impl IntoView {
    // Outermost ring first so inner colors paint on top.
    let rings: Vec<_> = node
        .line_colors
        .iter()
        .enumerate()
        .rev()
        .map(|(index, color)| {
            let radius = STATION_RADIUS + RING_STEP * index as f64;
            view! {
                <circle class="map-node__ring" r=radius fill=color.clone() />
            }
        })
        .collect();

    let halo = node.halo_color.clone().map(|color| {
        view! {
            <circle
                class="map-node__halo"
                r={STATION_RADIUS + RING_STEP * node.line_colors.len() as f64 + 4.0}
                fill="none"
                stroke=color
                stroke-width="2"
                stroke-dasharray="4 3"
            />
        }
    });

    let node_id = node.id.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        // In location-select mode the surface owns the click.
        if map_state.get_untracked().mode == InteractionMode::LocationSelect {
            return;
        }
        ev.stop_propagation();
        let id = node_id.clone();
        map_state.update(|state| {
            if !state.selection.remove(&id) {
                state.selection.insert(id);
            }
        });
    };

    view! {
        <g
            class=if node.selected { "map-node map-node--selected" } else { "map-node" }
            transform=format!("translate({}, {})", node.x, node.y)
            on:click=on_click
        >
            {halo}
            {rings}
            <circle
                class="map-node__core"
                r={STATION_RADIUS - 4.0}
                fill="var(--node-core, #ffffff)"
            />
            <text class="map-node__label" y={STATION_RADIUS + 14.0} text-anchor="middle">
                {node.label}
            </text>
        </g>
    }
}

/// Map host component.
///
/// On hydration this keeps a [`MapEngineCore`] in sync with `MapState`,
/// consumes focus requests, and captures click locations while the add-station
/// flow is in location-select mode.
#[component]
pub fn MapHost() -> impl IntoView {
    let map_state = expect_context::<RwSignal<MapState>>();
    let _ui = expect_context::<RwSignal<UiState>>();
    let engine = RwSignal::new({
        let mut core = MapEngineCore::new();
        core.set_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        core
    });
    #[cfg(feature = "hydrate")]
    let last_focus_seq = RwSignal::new(0_u64);

    // Mirror the fetched map into the engine so camera math sees it.
    Effect::new(move || {
        let map = map_state.with(|state| state.map.clone());
        if let Some(map) = map {
            engine.update(|core| core.set_map(map));
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let (seq, target) =
            map_state.with(|state| (state.focus_seq, state.focus_station_id.clone()));
        if seq == 0 || seq == last_focus_seq.get_untracked() {
            return;
        }
        let Some(station_id) = target else {
            return;
        };
        engine.update(|core| {
            if core.focus_station(&station_id).is_none() {
                leptos::logging::warn!("focus request for unknown station {station_id}");
            }
        });
        last_focus_seq.set(seq);
    });

    let on_surface_click = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if map_state.get_untracked().mode != InteractionMode::LocationSelect {
                    return;
                }
                let screen = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                let world = engine.with_untracked(|core| core.capture_location(screen));
                map_state.update(|state| state.capture_location(world.x, world.y));
                _ui.update(|u| u.add_station_open = true);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let camera_transform = move || {
        engine.with(|core| {
            format!(
                "translate({}, {}) scale({})",
                core.camera.pan_x, core.camera.pan_y, core.camera.zoom
            )
        })
    };

    let edges = move || {
        map_state.with(|state| {
            state
                .map
                .as_ref()
                .map(build_edges)
                .unwrap_or_default()
                .into_iter()
                .map(edge_view)
                .collect::<Vec<_>>()
        })
    };

    let nodes = move || {
        map_state.with(|state| {
            let Some(map) = state.map.as_ref() else {
                return Vec::new();
            };
            let halo = state.location_select_color();
            build_nodes(map, &state.selection, halo.as_deref())
                .into_iter()
                .map(|node| node_view(node, map_state))
                .collect::<Vec<_>>()
        })
    };

    let surface_class = move || {
        if map_state.with(|state| state.mode == InteractionMode::LocationSelect) {
            "map-host map-host--selecting"
        } else {
            "map-host"
        }
    };

    view! {
        <svg
            class=surface_class
            width=VIEWPORT_WIDTH
            height=VIEWPORT_HEIGHT
            viewBox=format!("0 0 {VIEWPORT_WIDTH} {VIEWPORT_HEIGHT}")
            on:click=on_surface_click
        >
            <g
                class="map-camera"
                transform=camera_transform
                style=format!("transition: transform {FOCUS_DURATION_MS}ms ease")
            >
                {edges}
                {nodes}
            </g>
        </svg>
    }
}
