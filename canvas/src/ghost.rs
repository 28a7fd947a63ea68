//! In-progress draw preview ("ghost").
//!
//! A ghost exists from pointer-down to pointer-up while a draw or
//! window-define tool is active. Pointer moves reshape it; release converts it
//! into a committed shape or new window bounds and the ghost is dropped.

#[cfg(test)]
#[path = "ghost_test.rs"]
mod ghost_test;

use serde::Serialize;

use crate::doc::{Rgb, Shape, ShapeError, ShapeKind};
use crate::geom::{Aabb, Point};

/// What a ghost turns into on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GhostKind {
    Line,
    Rectangle,
    Ellipse,
    Freehand,
    /// Redefines the clipping window instead of creating an object.
    Window,
}

/// Result of committing a ghost.
#[derive(Debug, Clone, PartialEq)]
pub enum Committed {
    Shape(Shape),
    Window(Aabb),
}

/// An uncommitted candidate object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ghost {
    pub kind: GhostKind,
    /// Provisional local-space vertices.
    pub vertices: Vec<Point>,
    pub color: Rgb,
    pub thickness: f64,
}

impl Ghost {
    /// Start a ghost at the press position. Two-point kinds begin collapsed
    /// onto `at`; freehand begins with a single sample.
    #[must_use]
    pub fn begin(kind: GhostKind, at: Point, color: Rgb, thickness: f64) -> Self {
        let vertices = match kind {
            GhostKind::Freehand => vec![at],
            GhostKind::Line | GhostKind::Rectangle | GhostKind::Ellipse | GhostKind::Window => vec![at, at],
        };
        Self { kind, vertices, color, thickness }
    }

    /// Track a pointer-move sample.
    pub fn update(&mut self, at: Point) {
        match self.kind {
            GhostKind::Freehand => self.vertices.push(at),
            GhostKind::Line | GhostKind::Rectangle | GhostKind::Ellipse | GhostKind::Window => {
                if let Some(last) = self.vertices.last_mut() {
                    *last = at;
                }
            }
        }
    }

    /// Preview geometry as a shape. Window ghosts preview as a rectangle.
    ///
    /// # Errors
    ///
    /// Propagates [`ShapeError`] if the vertex list was emptied externally.
    pub fn preview(&self) -> Result<Shape, ShapeError> {
        let kind = match self.kind {
            GhostKind::Line => ShapeKind::Line,
            GhostKind::Rectangle | GhostKind::Window => ShapeKind::Rectangle,
            GhostKind::Ellipse => ShapeKind::Ellipse,
            GhostKind::Freehand => ShapeKind::Freehand,
        };
        Shape::from_vertices(kind, &self.vertices)
    }

    /// Convert into the committed result.
    ///
    /// # Errors
    ///
    /// Propagates [`ShapeError`] if the vertex list does not fit the kind.
    pub fn commit(self) -> Result<Committed, ShapeError> {
        let shape = self.preview()?;
        match (self.kind, shape) {
            (GhostKind::Window, Shape::Rectangle { a, b }) => Ok(Committed::Window(Aabb::from_corners(a, b))),
            (_, shape) => Ok(Committed::Shape(shape)),
        }
    }
}
