// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn rect_center_is_the_middle_of_the_box() {
    assert_eq!(rect_center(0.0, 0.0, 20.0, 20.0), Vec2::new(10.0, 10.0));
    assert_eq!(rect_center(100.0, 40.0, 20.0, 10.0), Vec2::new(110.0, 45.0));
    assert_eq!(rect_center(-5.0, -5.0, 0.0, 0.0), Vec2::new(-5.0, -5.0));
}

#[test]
fn floating_layer_center_tracks_its_offset() {
    // A 20px star whose float layer has drifted 10px up inside a static
    // outer box: the measured center has to follow the drawn star.
    let outer = rect_center(200.0, 300.0, 20.0, 20.0);
    let floating = rect_center(200.0, 290.0, 20.0, 20.0);
    assert_eq!(floating - outer, Vec2::new(0.0, -10.0));
}

#[test]
fn pointer_tracking_follows_hover_capability() {
    assert_eq!(tracking_change(false, true), TrackingChange::Wire);
    assert_eq!(tracking_change(true, false), TrackingChange::Unwire);
    assert_eq!(tracking_change(true, true), TrackingChange::Keep);
    assert_eq!(tracking_change(false, false), TrackingChange::Keep);
}
