#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_pan_is_zero() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
}

#[test]
fn camera_default_zoom_is_one() {
    assert_eq!(Camera::default().zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    let world = cam.screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 100.0, pan_y: 50.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(140.0, 90.0));
    assert!(point_approx_eq(world, Point::new(20.0, 20.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_round_trips() {
    let cam = Camera { pan_x: -37.5, pan_y: 12.0, zoom: 1.4 };
    let world = Point::new(420.0, 310.0);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

// --- center_on ---

#[test]
fn center_on_places_target_at_viewport_center() {
    let mut cam = Camera::default();
    let target = Point::new(450.0, 550.0);
    cam.center_on(target, 800.0, 600.0, 1.4);
    let screen = cam.world_to_screen(target);
    assert!(point_approx_eq(screen, Point::new(400.0, 300.0)));
}

#[test]
fn center_on_sets_requested_zoom() {
    let mut cam = Camera::default();
    cam.center_on(Point::new(0.0, 0.0), 800.0, 600.0, 2.5);
    assert_eq!(cam.zoom, 2.5);
}
