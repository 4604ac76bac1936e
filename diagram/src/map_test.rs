use super::*;

fn station(id: &str, lines: &[&str]) -> Station {
    Station {
        id: id.to_owned(),
        name: id.to_uppercase(),
        description: None,
        x: 0.0,
        y: 0.0,
        lines: lines.iter().map(|&l| l.to_owned()).collect(),
        visible: true,
    }
}

fn sample_map() -> MetroMap {
    let mut map = MetroMap {
        id: "m1".to_owned(),
        name: "Sample".to_owned(),
        ..MetroMap::default()
    };
    map.stations.insert("a".to_owned(), station("a", &["red"]));
    map.stations.insert("b".to_owned(), station("b", &["red"]));
    map.lines.insert(
        "red".to_owned(),
        Line {
            id: "red".to_owned(),
            name: "Red".to_owned(),
            color: "#ff0000".to_owned(),
            stations: vec!["a".to_owned(), "b".to_owned()],
        },
    );
    map
}

// --- Defaults ---

#[test]
fn metro_map_default_is_empty() {
    let map = MetroMap::default();
    assert!(map.stations.is_empty());
    assert!(map.lines.is_empty());
    assert!(!map.has_lines());
}

// --- Lookups ---

#[test]
fn station_lookup_by_id() {
    let map = sample_map();
    assert_eq!(map.station("a").map(|s| s.name.as_str()), Some("A"));
    assert!(map.station("zz").is_none());
}

#[test]
fn line_lookup_by_id() {
    let map = sample_map();
    assert_eq!(map.line("red").map(|l| l.color.as_str()), Some("#ff0000"));
    assert!(map.line("blue").is_none());
}

#[test]
fn has_lines_true_with_one_line() {
    assert!(sample_map().has_lines());
}

// --- Visibility ---

#[test]
fn is_visible_false_for_unknown_id() {
    assert!(!sample_map().is_visible("zz"));
}

#[test]
fn is_visible_tracks_station_flag() {
    let mut map = sample_map();
    assert!(map.is_visible("a"));
    if let Some(s) = map.stations.get_mut("a") {
        s.visible = false;
    }
    assert!(!map.is_visible("a"));
}

// --- Serde ---

#[test]
fn station_visible_defaults_to_true_when_absent() {
    let json = r#"{"id":"a","name":"A","x":1.0,"y":2.0,"lines":["red"]}"#;
    let station: Station = serde_json::from_str(json).expect("station json");
    assert!(station.visible);
    assert!(station.description.is_none());
}

#[test]
fn line_stations_default_to_empty_when_absent() {
    let json = r##"{"id":"red","name":"Red","color":"#ff0000"}"##;
    let line: Line = serde_json::from_str(json).expect("line json");
    assert!(line.stations.is_empty());
}

#[test]
fn metro_map_round_trips_through_json() {
    let map = sample_map();
    let json = serde_json::to_string(&map).expect("serialize map");
    let back: MetroMap = serde_json::from_str(&json).expect("deserialize map");
    assert_eq!(map, back);
}
