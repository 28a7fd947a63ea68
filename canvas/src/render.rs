//! Render view: everything the external renderer needs, resolved.
//!
//! The engine never draws. This module turns document and UI state into
//! read-only values: per-object display colors, and world-space stroke paths
//! with window clipping already applied. It does not mutate any state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::clip::{self, ClipWindow};
use crate::consts::{CONTAINED_COLOR, SELECTED_COLOR};
use crate::doc::{DocStore, Object, ObjectId, Rgb, Shape};
use crate::geom::{Aabb, Point};
use crate::selection::SelectionSet;

/// Why an object is shown in the color it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Normal,
    Selected,
    /// Fully inside the active clipping window. Wins over `Selected`.
    Contained,
}

/// One object as the renderer should draw it.
#[derive(Debug, Clone, Serialize)]
pub struct RenderItem<'a> {
    pub id: ObjectId,
    pub object: &'a Object,
    pub role: Role,
    /// Display color after selection and containment overrides.
    pub color: Rgb,
}

/// Resolve display roles and colors for every object, bottom to top.
#[must_use]
pub fn items<'a>(doc: &'a DocStore, selection: &SelectionSet, window: &ClipWindow) -> Vec<RenderItem<'a>> {
    doc.iter()
        .map(|object| {
            let role = if window.fully_contains(object) {
                Role::Contained
            } else if selection.contains(&object.id) {
                Role::Selected
            } else {
                Role::Normal
            };
            let color = match role {
                Role::Normal => object.color,
                Role::Selected => SELECTED_COLOR,
                Role::Contained => CONTAINED_COLOR,
            };
            RenderItem { id: object.id, object, role, color }
        })
        .collect()
}

/// Local-space outline samples of an ellipse, counter-clockwise from +X.
#[must_use]
pub fn ellipse_samples(center: Point, rx: f64, ry: f64, segments: usize) -> Vec<Point> {
    #[allow(clippy::cast_precision_loss)]
    let n = segments.max(1) as f64;
    (0..segments.max(1))
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let theta = TAU * i as f64 / n;
            Point::new(center.x + rx * theta.cos(), center.y + ry * theta.sin())
        })
        .collect()
}

/// World-space polylines for `obj`, clipped when `window` is active.
///
/// Lines and rectangle edges are clipped exactly; ellipse outlines and
/// freehand strokes use sampled clipping. Points are never clipped.
#[must_use]
pub fn stroke_paths(obj: &Object, window: &ClipWindow, ellipse_segments: usize) -> Vec<Vec<Point>> {
    let world = |p: Point| obj.to_world(p);
    let bounds = window.active_bounds();
    match &obj.shape {
        Shape::Point { at } => vec![vec![world(*at)]],
        Shape::Line { a, b } => edge_paths(&[(world(*a), world(*b))], bounds),
        Shape::Rectangle { a, b } => {
            let corners = [*a, Point::new(b.x, a.y), *b, Point::new(a.x, b.y)].map(world);
            let edges: Vec<(Point, Point)> = (0..4).map(|i| (corners[i], corners[(i + 1) % 4])).collect();
            edge_paths(&edges, bounds)
        }
        Shape::Ellipse { center, .. } => {
            let (rx, ry) = obj.shape.radii().unwrap_or_default();
            let samples: Vec<Point> = ellipse_samples(*center, rx, ry, ellipse_segments).into_iter().map(world).collect();
            sampled_paths(samples, bounds, true)
        }
        Shape::Freehand { samples } => sampled_paths(samples.iter().copied().map(world).collect(), bounds, false),
    }
}

fn edge_paths(edges: &[(Point, Point)], bounds: Option<&Aabb>) -> Vec<Vec<Point>> {
    edges
        .iter()
        .filter_map(|&(a, b)| match bounds {
            Some(window) => clip::clip_segment(a, b, window),
            None => Some((a, b)),
        })
        .map(|(a, b)| vec![a, b])
        .collect()
}

fn sampled_paths(mut samples: Vec<Point>, bounds: Option<&Aabb>, closed: bool) -> Vec<Vec<Point>> {
    match bounds {
        Some(window) => clip::clip_sampled(&samples, window, closed),
        None => {
            if closed {
                if let Some(&first) = samples.first() {
                    samples.push(first);
                }
            }
            vec![samples]
        }
    }
}
