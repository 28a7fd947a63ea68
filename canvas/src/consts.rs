//! Shared numeric and color constants for the canvas crate.

use crate::doc::Rgb;

// ── Strokes ─────────────────────────────────────────────────────

/// Thinnest stroke an object may have.
pub const MIN_THICKNESS: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit tolerance grows by this many units per unit of stroke width.
pub const HIT_TOLERANCE_PER_THICKNESS: f64 = 3.0;

/// Hit tolerance floor, added on top of the thickness term.
pub const HIT_TOLERANCE_BASE: f64 = 3.0;

/// Points are easier to hit: their squared tolerance is doubled.
pub const POINT_TOLERANCE_FACTOR: f64 = 2.0;

/// Ellipse hit slack: `(dx/rx)² + (dy/ry)²` may reach this value.
pub const ELLIPSE_HIT_LIMIT: f64 = 1.1;

// ── Display colors ──────────────────────────────────────────────

/// Stroke color of selected objects.
pub const SELECTED_COLOR: Rgb = Rgb(0.9, 0.5, 0.0);

/// Stroke color of objects fully inside the active clipping window.
pub const CONTAINED_COLOR: Rgb = Rgb(0.1, 0.8, 0.2);

/// Stroke color of the in-progress draw preview.
pub const GHOST_COLOR: Rgb = Rgb(0.5, 0.5, 0.5);

/// Marquee outline color. The renderer fills it at [`MARQUEE_FILL_ALPHA`].
pub const MARQUEE_COLOR: Rgb = Rgb(0.3, 0.5, 0.9);

pub const MARQUEE_FILL_ALPHA: f32 = 0.2;

/// Default clipping window outline color.
pub const WINDOW_COLOR: Rgb = Rgb::RED;

/// Stroke width used for the window-define preview.
pub const WINDOW_GHOST_THICKNESS: f64 = 1.5;

// ── Defaults ────────────────────────────────────────────────────

/// Clipping window bounds before the user defines one: `(xmin, ymin, xmax, ymax)`.
pub const DEFAULT_WINDOW_BOUNDS: (f64, f64, f64, f64) = (100.0, 100.0, 500.0, 400.0);

/// Initial host window size in pixels.
pub const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 720.0);
