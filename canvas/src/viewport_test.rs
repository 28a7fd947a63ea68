#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_size() {
    let v = Viewport::default();
    assert_eq!(v.width, 1280.0);
    assert_eq!(v.height, 720.0);
}

#[test]
fn window_to_scene_flips_y() {
    let v = Viewport { width: 800.0, height: 600.0 };
    assert_eq!(v.window_to_scene(Point::new(10.0, 0.0)), Point::new(10.0, 600.0));
    assert_eq!(v.window_to_scene(Point::new(10.0, 600.0)), Point::new(10.0, 0.0));
    assert_eq!(v.window_to_scene(Point::new(400.0, 100.0)), Point::new(400.0, 500.0));
}

#[test]
fn resize_tracks_new_height() {
    let mut v = Viewport::default();
    v.resize(640.0, 480.0);
    assert_eq!(v.window_to_scene(Point::new(0.0, 80.0)), Point::new(0.0, 400.0));
}

#[test]
fn resize_clamps_degenerate_sizes() {
    let mut v = Viewport::default();
    v.resize(-5.0, 0.0);
    assert_eq!(v.width, 0.0);
    assert_eq!(v.height, 1.0);
}
