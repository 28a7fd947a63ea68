//! Document model: shapes, scene objects, and the ordered in-memory store.
//!
//! This module defines what is on the canvas (`Shape`, `Object`), the color
//! type shared with the renderer (`Rgb`), and the runtime store that owns all
//! live objects (`DocStore`).
//!
//! Objects are addressed by a stable [`ObjectId`] that never changes for the
//! life of the object. The store keeps objects in z-order (later = on top) and
//! resolves ids through an id→slot index, so removing one object never changes
//! which object another id refers to.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::MIN_THICKNESS;
use crate::geom::{Aabb, Point, Transform};

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb(0.0, 0.0, 1.0);
}

/// The kind of a shape, without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Point,
    Line,
    Rectangle,
    Ellipse,
    Freehand,
}

impl ShapeKind {
    /// Human-readable lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Freehand => "freehand",
        }
    }
}

/// Error returned when building a [`Shape`] from a raw vertex list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The vertex count does not match the kind's contract.
    #[error("{} needs {expected} vertices, got {got}", .kind.name())]
    VertexCount { kind: ShapeKind, expected: &'static str, got: usize },
}

/// Shape geometry in local (untransformed) space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// A single point.
    Point { at: Point },
    /// A segment between two endpoints.
    Line { a: Point, b: Point },
    /// An axis-aligned (in local space) rectangle given by opposite corners.
    Rectangle { a: Point, b: Point },
    /// An ellipse; radii are `|extent − center|` per axis.
    Ellipse { center: Point, extent: Point },
    /// A polyline of pointer samples. Never empty.
    Freehand { samples: Vec<Point> },
}

impl Shape {
    /// Build a shape from an ordered vertex list, enforcing the kind's vertex
    /// count: 1 for points, 2 for lines, rectangles and ellipses, at least 1
    /// for freehand.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::VertexCount`] when the count does not match.
    pub fn from_vertices(kind: ShapeKind, vertices: &[Point]) -> Result<Self, ShapeError> {
        let err = |expected| ShapeError::VertexCount { kind, expected, got: vertices.len() };
        match (kind, vertices) {
            (ShapeKind::Point, [at]) => Ok(Self::Point { at: *at }),
            (ShapeKind::Line, [a, b]) => Ok(Self::Line { a: *a, b: *b }),
            (ShapeKind::Rectangle, [a, b]) => Ok(Self::Rectangle { a: *a, b: *b }),
            (ShapeKind::Ellipse, [center, extent]) => Ok(Self::Ellipse { center: *center, extent: *extent }),
            (ShapeKind::Freehand, samples) if !samples.is_empty() => Ok(Self::Freehand { samples: samples.to_vec() }),
            (ShapeKind::Point, _) => Err(err("exactly 1")),
            (ShapeKind::Freehand, _) => Err(err("at least 1")),
            (ShapeKind::Line | ShapeKind::Rectangle | ShapeKind::Ellipse, _) => Err(err("exactly 2")),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point { .. } => ShapeKind::Point,
            Self::Line { .. } => ShapeKind::Line,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Freehand { .. } => ShapeKind::Freehand,
        }
    }

    /// Local-space vertices in stored order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Self::Point { at } => vec![*at],
            Self::Line { a, b } | Self::Rectangle { a, b } => vec![*a, *b],
            Self::Ellipse { center, extent } => vec![*center, *extent],
            Self::Freehand { samples } => samples.clone(),
        }
    }

    /// Rotation/scale pivot in local space.
    ///
    /// Points, ellipses and freehand strokes pivot on their first vertex;
    /// lines and rectangles pivot on the mean of their two vertices.
    #[must_use]
    pub fn center(&self) -> Point {
        match self {
            Self::Point { at } => *at,
            Self::Ellipse { center, .. } => *center,
            Self::Freehand { samples } => samples.first().copied().unwrap_or_default(),
            Self::Line { a, b } | Self::Rectangle { a, b } => Point::mean(&[*a, *b]).unwrap_or(*a),
        }
    }

    /// Ellipse radii `(rx, ry)`; `None` for every other shape.
    #[must_use]
    pub fn radii(&self) -> Option<(f64, f64)> {
        match self {
            Self::Ellipse { center, extent } => Some(((extent.x - center.x).abs(), (extent.y - center.y).abs())),
            _ => None,
        }
    }

    /// Local points whose transformed images bound the shape.
    ///
    /// Rectangles yield all four corners and ellipses their four axis-extremal
    /// points, not the two stored vertices; rotation can move any of them
    /// onto the bounding box.
    #[must_use]
    pub fn extremal_points(&self) -> Vec<Point> {
        match self {
            Self::Rectangle { a, b } => vec![*a, Point::new(b.x, a.y), *b, Point::new(a.x, b.y)],
            Self::Ellipse { center, extent } => {
                let rx = (extent.x - center.x).abs();
                let ry = (extent.y - center.y).abs();
                vec![
                    Point::new(center.x + rx, center.y),
                    Point::new(center.x - rx, center.y),
                    Point::new(center.x, center.y + ry),
                    Point::new(center.x, center.y - ry),
                ]
            }
            _ => self.vertices(),
        }
    }
}

/// A scene object: shape geometry plus style and transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Stable identifier. Pasted copies receive fresh ids.
    pub id: ObjectId,
    pub shape: Shape,
    pub color: Rgb,
    /// Stroke width, never below [`MIN_THICKNESS`].
    pub thickness: f64,
    pub transform: Transform,
}

impl Object {
    /// Create an object with a fresh id and the identity transform.
    #[must_use]
    pub fn new(shape: Shape, color: Rgb, thickness: f64) -> Self {
        Self { id: Uuid::new_v4(), shape, color, thickness: thickness.max(MIN_THICKNESS), transform: Transform::default() }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Pivot of the object in local space.
    #[must_use]
    pub fn center(&self) -> Point {
        self.shape.center()
    }

    /// Map a local-space point into world space.
    #[must_use]
    pub fn to_world(&self, local: Point) -> Point {
        self.transform.apply(local, self.center())
    }

    /// Map a world-space point into this object's local space.
    #[must_use]
    pub fn to_local(&self, world: Point) -> Point {
        self.transform.invert(world, self.center())
    }

    /// World-space bounding box after applying the transform.
    #[must_use]
    pub fn aabb(&self) -> Option<Aabb> {
        let center = self.center();
        Aabb::from_points(
            self.shape
                .extremal_points()
                .into_iter()
                .map(|p| self.transform.apply(p, center)),
        )
    }

    /// Deep copy with a fresh id.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self { id: Uuid::new_v4(), ..self.clone() }
    }
}

/// Ordered in-memory store of scene objects.
#[derive(Debug, Default)]
pub struct DocStore {
    objects: Vec<Object>,
    slots: HashMap<ObjectId, usize>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on top of the z-order and return its id.
    pub fn append(&mut self, obj: Object) -> ObjectId {
        let id = obj.id;
        if let Some(&slot) = self.slots.get(&id) {
            self.objects[slot] = obj;
            return id;
        }
        self.slots.insert(id, self.objects.len());
        self.objects.push(obj);
        id
    }

    /// Remove every object whose id is in `ids`, returning the removed objects
    /// in scene order. Unknown ids are skipped.
    pub fn remove(&mut self, ids: &[ObjectId]) -> Vec<Object> {
        if !ids.iter().any(|id| self.slots.contains_key(id)) {
            return Vec::new();
        }
        let (removed, kept): (Vec<Object>, Vec<Object>) =
            std::mem::take(&mut self.objects).into_iter().partition(|o| ids.contains(&o.id));
        self.objects = kept;
        self.reindex();
        removed
    }

    /// Remove all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.slots.clear();
    }

    /// Independent copies of the objects named by `ids`, in scene order.
    /// Copies keep their source ids; [`DocStore::insert`] assigns new ones.
    #[must_use]
    pub fn snapshot(&self, ids: &[ObjectId]) -> Vec<Object> {
        self.objects.iter().filter(|o| ids.contains(&o.id)).cloned().collect()
    }

    /// Append copies of `objects` with fresh ids, returning the new ids in order.
    pub fn insert(&mut self, objects: &[Object]) -> Vec<ObjectId> {
        objects.iter().map(|o| self.append(o.duplicate())).collect()
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&Object> {
        self.slots.get(id).and_then(|&slot| self.objects.get(slot))
    }

    /// Return a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut Object> {
        let slot = *self.slots.get(id)?;
        self.objects.get_mut(slot)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.slots.contains_key(id)
    }

    /// Objects bottom-to-top (draw order).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Object> {
        self.objects.iter()
    }

    /// Objects top-to-bottom (pick order).
    pub fn iter_rev(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().rev()
    }

    /// All ids in scene order.
    #[must_use]
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id).collect()
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn reindex(&mut self) {
        self.slots = self.objects.iter().enumerate().map(|(slot, o)| (o.id, slot)).collect();
    }
}
