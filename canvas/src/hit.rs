//! Hit-testing: does a world-space point land on an object?
//!
//! The pointer is first mapped into the object's local space with the inverse
//! transform, then tested against the untransformed geometry. That keeps every
//! predicate axis-aligned even when the object is drawn rotated or scaled.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{ELLIPSE_HIT_LIMIT, HIT_TOLERANCE_BASE, HIT_TOLERANCE_PER_THICKNESS, POINT_TOLERANCE_FACTOR};
use crate::doc::{DocStore, Object, ObjectId, Shape};
use crate::geom::{Aabb, Point};

/// Hit radius around strokes of the given width.
#[must_use]
pub fn tolerance(thickness: f64) -> f64 {
    thickness * HIT_TOLERANCE_PER_THICKNESS + HIT_TOLERANCE_BASE
}

/// Test whether the world-space point `world` lands on `obj`.
#[must_use]
pub fn is_point_on_object(world: Point, obj: &Object) -> bool {
    let local = obj.to_local(world);
    hits_local(&obj.shape, local, tolerance(obj.thickness).powi(2))
}

/// Local-space predicate shared by every shape kind.
///
/// Freehand strokes test each consecutive pair of samples as a temporary
/// line in the parent's local frame, so every segment pivots with the stroke.
fn hits_local(shape: &Shape, p: Point, tol_sq: f64) -> bool {
    match shape {
        Shape::Point { at } => p.dist_sq(*at) < tol_sq * POINT_TOLERANCE_FACTOR,
        Shape::Line { a, b } => near_segment(p, *a, *b, tol_sq),
        Shape::Rectangle { a, b } => Aabb::from_corners(*a, *b).contains(p),
        Shape::Ellipse { center, .. } => {
            let Some((rx, ry)) = shape.radii() else {
                return false;
            };
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let dx = (p.x - center.x) / rx;
            let dy = (p.y - center.y) / ry;
            dx * dx + dy * dy <= ELLIPSE_HIT_LIMIT
        }
        Shape::Freehand { samples } => samples.windows(2).any(|seg| {
            let segment = Shape::Line { a: seg[0], b: seg[1] };
            hits_local(&segment, p, tol_sq)
        }),
    }
}

/// Topmost object under `world`, if any.
#[must_use]
pub fn pick(doc: &DocStore, world: Point) -> Option<ObjectId> {
    doc.iter_rev()
        .find(|obj| is_point_on_object(world, obj))
        .map(|obj| obj.id)
}

fn near_segment(p: Point, v: Point, w: Point, tol_sq: f64) -> bool {
    let len_sq = v.dist_sq(w);
    if len_sq <= 0.0 {
        return p.dist_sq(v) < tol_sq;
    }
    let t = ((p - v).dot(w - v) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(v.x + t * (w.x - v.x), v.y + t * (w.y - v.y));
    p.dist_sq(proj) < tol_sq
}
