#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scheme_value_maps_bool_to_storage_string() {
    assert_eq!(scheme_value(true), "dark");
    assert_eq!(scheme_value(false), "light");
}

#[test]
fn storage_keys_match_page_conventions() {
    assert_eq!(METRO_THEME_KEY, "metro-map-theme");
    assert_eq!(NEWS_THEME_KEY, "news-theme");
}

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference(METRO_THEME_KEY));
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(METRO_THEME_KEY, false));
    assert!(!toggle(METRO_THEME_KEY, true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
