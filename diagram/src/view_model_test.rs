use std::collections::HashSet;

use super::*;
use crate::map::{Line, Station};

fn station(id: &str, x: f64, y: f64, lines: &[&str]) -> Station {
    Station {
        id: id.to_owned(),
        name: format!("Station {id}"),
        description: None,
        x,
        y,
        lines: lines.iter().map(|&l| l.to_owned()).collect(),
        visible: true,
    }
}

fn line(id: &str, color: &str, stations: &[&str]) -> Line {
    Line {
        id: id.to_owned(),
        name: id.to_uppercase(),
        color: color.to_owned(),
        stations: stations.iter().map(|&s| s.to_owned()).collect(),
    }
}

fn map_with(stations: Vec<Station>, lines: Vec<Line>) -> MetroMap {
    let mut map = MetroMap {
        id: "m1".to_owned(),
        name: "Test".to_owned(),
        ..MetroMap::default()
    };
    for s in stations {
        map.stations.insert(s.id.clone(), s);
    }
    for l in lines {
        map.lines.insert(l.id.clone(), l);
    }
    map
}

fn no_selection() -> HashSet<String> {
    HashSet::new()
}

// =============================================================
// build_nodes
// =============================================================

#[test]
fn nodes_exclude_hidden_stations() {
    let mut hidden = station("b", 1.0, 1.0, &["red"]);
    hidden.visible = false;
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red"]), hidden],
        vec![line("red", "#ff0000", &["a", "b"])],
    );
    let nodes = build_nodes(&map, &no_selection(), None);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, "a");
}

#[test]
fn nodes_resolve_line_colors_in_membership_order() {
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red", "blue"])],
        vec![
            line("red", "#ff0000", &["a"]),
            line("blue", "#0000ff", &["a"]),
        ],
    );
    let nodes = build_nodes(&map, &no_selection(), None);
    assert_eq!(nodes[0].line_colors, vec!["#ff0000", "#0000ff"]);
}

#[test]
fn nodes_drop_unresolvable_line_ids() {
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red", "ghost"])],
        vec![line("red", "#ff0000", &["a"])],
    );
    let nodes = build_nodes(&map, &no_selection(), None);
    assert_eq!(nodes[0].line_colors, vec!["#ff0000"]);
}

#[test]
fn nodes_fall_back_to_gray_with_no_resolvable_line() {
    let map = map_with(vec![station("a", 0.0, 0.0, &["ghost"])], vec![]);
    let nodes = build_nodes(&map, &no_selection(), None);
    assert_eq!(nodes[0].line_colors, vec![crate::consts::FALLBACK_NODE_COLOR]);
}

#[test]
fn nodes_flag_selected_by_membership() {
    let map = map_with(
        vec![station("a", 0.0, 0.0, &[]), station("b", 1.0, 1.0, &[])],
        vec![],
    );
    let selected: HashSet<String> = ["a".to_owned()].into_iter().collect();
    let nodes = build_nodes(&map, &selected, None);
    assert!(nodes.iter().find(|n| n.id == "a").is_some_and(|n| n.selected));
    assert!(nodes.iter().find(|n| n.id == "b").is_some_and(|n| !n.selected));
}

#[test]
fn nodes_carry_halo_color_in_location_select() {
    let map = map_with(vec![station("a", 0.0, 0.0, &[])], vec![]);
    let nodes = build_nodes(&map, &no_selection(), Some("#ff0000"));
    assert_eq!(nodes[0].halo_color.as_deref(), Some("#ff0000"));
    let nodes = build_nodes(&map, &no_selection(), None);
    assert!(nodes[0].halo_color.is_none());
}

#[test]
fn nodes_are_sorted_by_station_id() {
    let map = map_with(
        vec![
            station("c", 0.0, 0.0, &[]),
            station("a", 0.0, 0.0, &[]),
            station("b", 0.0, 0.0, &[]),
        ],
        vec![],
    );
    let nodes = build_nodes(&map, &no_selection(), None);
    let ids: Vec<&str> = nodes
        .iter()
        .map(|n| n.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// =============================================================
// build_edges
// =============================================================

#[test]
fn edges_emit_consecutive_pairs_in_order() {
    let map = map_with(
        vec![
            station("a", 0.0, 0.0, &["red"]),
            station("b", 1.0, 0.0, &["red"]),
            station("c", 2.0, 0.0, &["red"]),
        ],
        vec![line("red", "#ff0000", &["a", "b", "c"])],
    );
    let edges = build_edges(&map);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].from, "a");
    assert_eq!(edges[0].to, "b");
    assert_eq!(edges[1].from, "b");
    assert_eq!(edges[1].to, "c");
}

#[test]
fn edges_count_is_visible_minus_one() {
    let stations: Vec<Station> = (0..5)
        .map(|i| station(&format!("s{i}"), f64::from(i), 0.0, &["red"]))
        .collect();
    let ids: Vec<&str> = ["s0", "s1", "s2", "s3", "s4"].to_vec();
    let map = map_with(stations, vec![line("red", "#ff0000", &ids)]);
    assert_eq!(build_edges(&map).len(), 4);
}

#[test]
fn edges_bridge_across_hidden_intermediate_station() {
    let mut middle = station("b", 1.0, 0.0, &["red"]);
    middle.visible = false;
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red"]), middle, station("c", 2.0, 0.0, &["red"])],
        vec![line("red", "#ff0000", &["a", "b", "c"])],
    );
    let edges = build_edges(&map);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, "a");
    assert_eq!(edges[0].to, "c");
}

#[test]
fn edges_skip_station_ids_with_no_station() {
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red"]), station("c", 2.0, 0.0, &["red"])],
        vec![line("red", "#ff0000", &["a", "ghost", "c"])],
    );
    let edges = build_edges(&map);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, "a");
    assert_eq!(edges[0].to, "c");
}

#[test]
fn edges_empty_for_single_visible_station() {
    let map = map_with(
        vec![station("a", 0.0, 0.0, &["red"])],
        vec![line("red", "#ff0000", &["a"])],
    );
    assert!(build_edges(&map).is_empty());
}

#[test]
fn shared_corridor_yields_parallel_edges_with_distinct_ids() {
    let map = map_with(
        vec![
            station("a", 0.0, 0.0, &["red", "blue"]),
            station("b", 1.0, 0.0, &["red", "blue"]),
        ],
        vec![
            line("red", "#ff0000", &["a", "b"]),
            line("blue", "#0000ff", &["a", "b"]),
        ],
    );
    let edges = build_edges(&map);
    assert_eq!(edges.len(), 2);
    assert_ne!(edges[0].id, edges[1].id);
    assert_eq!(edges[0].id, "blue:a->b");
    assert_eq!(edges[1].id, "red:a->b");
}

#[test]
fn edge_positions_come_from_station_coordinates() {
    let map = map_with(
        vec![station("a", 10.0, 20.0, &["red"]), station("b", 30.0, 40.0, &["red"])],
        vec![line("red", "#ff0000", &["a", "b"])],
    );
    let edges = build_edges(&map);
    assert!((edges[0].x1 - 10.0).abs() < f64::EPSILON);
    assert!((edges[0].y1 - 20.0).abs() < f64::EPSILON);
    assert!((edges[0].x2 - 30.0).abs() < f64::EPSILON);
    assert!((edges[0].y2 - 40.0).abs() < f64::EPSILON);
}
