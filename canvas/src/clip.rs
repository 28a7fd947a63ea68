//! Clipping against the axis-aligned clipping window.
//!
//! Two policies live here:
//!
//! - [`clip_segment`] is exact Cohen-Sutherland clipping for straight edges
//!   (lines and rectangle sides).
//! - [`clip_sampled`] is a coarser policy for sampled curves (tessellated
//!   ellipses, freehand strokes): samples outside the window are dropped and
//!   break the curve into disconnected strips. No intersection points are
//!   computed, so strips stop short of the window edge.
//!
//! All inputs are world-space points.

#[cfg(test)]
#[path = "clip_test.rs"]
mod clip_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WINDOW_BOUNDS, WINDOW_COLOR};
use crate::doc::{Object, Rgb};
use crate::geom::{Aabb, Point};

/// Region code of a point relative to the window. Left/right are exclusive,
/// as are bottom/top; a corner region sets one of each.
pub type Outcode = u8;

pub const INSIDE: Outcode = 0;
pub const LEFT: Outcode = 1;
pub const RIGHT: Outcode = 2;
pub const BOTTOM: Outcode = 4;
pub const TOP: Outcode = 8;

/// The single process-wide clipping window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipWindow {
    /// Window rectangle in world space.
    pub bounds: Aabb,
    /// Clipping and containment highlighting only apply while active.
    pub active: bool,
    /// Outline color for the renderer.
    pub color: Rgb,
}

impl Default for ClipWindow {
    fn default() -> Self {
        let (xmin, ymin, xmax, ymax) = DEFAULT_WINDOW_BOUNDS;
        Self { bounds: Aabb::new(xmin, ymin, xmax, ymax), active: false, color: WINDOW_COLOR }
    }
}

impl ClipWindow {
    /// Window bounds when active, `None` otherwise.
    #[must_use]
    pub fn active_bounds(&self) -> Option<&Aabb> {
        self.active.then_some(&self.bounds)
    }

    /// True when the window is active and `obj`'s world AABB lies entirely
    /// inside it. Used for highlighting only, never for clipping.
    #[must_use]
    pub fn fully_contains(&self, obj: &Object) -> bool {
        self.active && obj.aabb().is_some_and(|b| b.within(&self.bounds))
    }
}

/// Classify `p` against `window`.
#[must_use]
pub fn outcode(p: Point, window: &Aabb) -> Outcode {
    let mut code = INSIDE;
    if p.x < window.min_x {
        code |= LEFT;
    } else if p.x > window.max_x {
        code |= RIGHT;
    }
    if p.y < window.min_y {
        code |= BOTTOM;
    } else if p.y > window.max_y {
        code |= TOP;
    }
    code
}

/// Cohen-Sutherland clip of the segment `a–b` against `window`.
///
/// Returns the visible part, or `None` when the segment lies wholly outside.
/// A segment already inside is returned unchanged.
#[must_use]
pub fn clip_segment(mut a: Point, mut b: Point, window: &Aabb) -> Option<(Point, Point)> {
    let mut code_a = outcode(a, window);
    let mut code_b = outcode(b, window);
    loop {
        if code_a | code_b == INSIDE {
            return Some((a, b));
        }
        if code_a & code_b != INSIDE {
            return None;
        }
        let out = if code_a == INSIDE { code_b } else { code_a };
        // Each division below is guarded by the outcode: a TOP/BOTTOM bit
        // means the endpoints straddle that horizontal edge, so dy != 0.
        let p = if out & TOP != 0 {
            Point::new(a.x + (b.x - a.x) * (window.max_y - a.y) / (b.y - a.y), window.max_y)
        } else if out & BOTTOM != 0 {
            Point::new(a.x + (b.x - a.x) * (window.min_y - a.y) / (b.y - a.y), window.min_y)
        } else if out & RIGHT != 0 {
            Point::new(window.max_x, a.y + (b.y - a.y) * (window.max_x - a.x) / (b.x - a.x))
        } else {
            Point::new(window.min_x, a.y + (b.y - a.y) * (window.min_x - a.x) / (b.x - a.x))
        };
        if out == code_a {
            a = p;
            code_a = outcode(a, window);
        } else {
            b = p;
            code_b = outcode(b, window);
        }
    }
}

/// Split a sampled curve into the strips that fall inside `window`.
///
/// Each sample is tested for closed containment; a sample outside ends the
/// current strip. When `closed` is set and every sample is inside, the single
/// strip is closed back onto its first sample.
#[must_use]
pub fn clip_sampled(points: &[Point], window: &Aabb, closed: bool) -> Vec<Vec<Point>> {
    let mut strips = Vec::new();
    let mut current = Vec::new();
    for &p in points {
        if window.contains(p) {
            current.push(p);
        } else if !current.is_empty() {
            strips.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        strips.push(current);
    }
    if closed && strips.len() == 1 && strips[0].len() == points.len() {
        if let Some(&first) = points.first() {
            strips[0].push(first);
        }
    }
    strips
}
