#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::DEFAULT_VIEWPORT;
use crate::geom::Point;

/// Host window size, used to convert window pixels (Y down) into scene
/// coordinates (Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self { width, height }
    }
}

impl Viewport {
    /// Track a host window resize. Height is kept at least 1.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(1.0);
    }

    /// Convert a raw window-pixel position into scene coordinates.
    #[must_use]
    pub fn window_to_scene(&self, window: Point) -> Point {
        Point::new(window.x, self.height - window.y)
    }
}
