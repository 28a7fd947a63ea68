//! Planar geometry primitives: points, per-object transforms, and bounding boxes.
//!
//! Every object stores its vertices in local space. [`Transform::apply`] maps a
//! local vertex into world space about the object's pivot, and
//! [`Transform::invert`] maps a world point back into local space for hit
//! testing. Both take the pivot explicitly; the pivot itself is a property of
//! the object's shape (see [`crate::doc::Shape::center`]).

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A point or displacement in local or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to `other`.
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate about the origin by `degrees` (counter-clockwise, Y up).
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos }
    }

    /// Centroid of a non-empty point set, or `None` when empty.
    #[must_use]
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let sum = points.iter().fold(Point::default(), |acc, p| acc + *p);
        Some(Point::new(sum.x / n, sum.y / n))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Per-object affine transform: scale, then rotate, both about the object's
/// pivot, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space offset added after rotation.
    pub translate: Point,
    /// Counter-clockwise rotation in degrees.
    pub rotate: f64,
    /// Per-axis scale factors.
    pub scale: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self { translate: Point::new(0.0, 0.0), rotate: 0.0, scale: Point::new(1.0, 1.0) }
    }
}

impl Transform {
    /// `world = R(θ)·S·(local − c) + c + t`
    #[must_use]
    pub fn apply(&self, local: Point, center: Point) -> Point {
        let offset = local - center;
        let scaled = Point::new(offset.x * self.scale.x, offset.y * self.scale.y);
        scaled.rotated(self.rotate) + center + self.translate
    }

    /// `local = S⁻¹·R(−θ)·(world − t − c) + c`
    ///
    /// A scale axis that is exactly zero is treated as `1.0` here so the
    /// inverse stays finite; the forward transform still collapses that axis.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn invert(&self, world: Point, center: Point) -> Point {
        let unrotated = (world - self.translate - center).rotated(-self.rotate);
        let sx = if self.scale.x == 0.0 { 1.0 } else { self.scale.x };
        let sy = if self.scale.y == 0.0 { 1.0 } else { self.scale.y };
        Point::new(unrotated.x / sx, unrotated.y / sy) + center
    }

    /// Multiply both scale axes by `factor`.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale.x *= factor;
        self.scale.y *= factor;
    }
}

/// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Box spanned by two arbitrary corners, normalized so min <= max.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { min_x: a.x.min(b.x), min_y: a.y.min(b.y), max_x: a.x.max(b.x), max_y: a.y.max(b.y) }
    }

    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self::new(first.x, first.y, first.x, first.y);
        Some(iter.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Closed containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// True when `self` lies entirely inside `outer` (edges may touch).
    #[must_use]
    pub fn within(&self, outer: &Aabb) -> bool {
        outer.min_x <= self.min_x && self.max_x <= outer.max_x && outer.min_y <= self.min_y && self.max_y <= outer.max_y
    }

    /// True unless the boxes are strictly separated on some axis. Touching
    /// edges count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max_x < other.min_x || self.min_x > other.max_x || self.max_y < other.min_y || self.min_y > other.max_y)
    }

    /// Shift the whole box by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            min_x: self.min_x + delta.x,
            min_y: self.min_y + delta.y,
            max_x: self.max_x + delta.x,
            max_y: self.max_y + delta.y,
        }
    }
}
