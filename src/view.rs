//! JSON snapshot of everything a renderer would draw.

use canvas::clip::ClipWindow;
use canvas::consts::{GHOST_COLOR, MARQUEE_COLOR, MARQUEE_FILL_ALPHA};
use canvas::doc::Rgb;
use canvas::geom::{Aabb, Point};
use canvas::ghost::{Ghost, GhostKind};
use canvas::input::Tool;
use canvas::render::RenderItem;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RenderView<'a> {
    pub tool: Tool,
    pub window: &'a ClipWindow,
    pub objects: Vec<ViewObject<'a>>,
    pub ghost: Option<GhostView<'a>>,
    pub marquee: Option<MarqueeView>,
}

/// One scene object with its resolved color and clipped stroke paths.
#[derive(Debug, Serialize)]
pub struct ViewObject<'a> {
    #[serde(flatten)]
    pub item: RenderItem<'a>,
    pub paths: Vec<Vec<Point>>,
}

#[derive(Debug, Serialize)]
pub struct GhostView<'a> {
    #[serde(flatten)]
    pub ghost: &'a Ghost,
    /// Shape ghosts draw grey; a window ghost keeps the window color.
    pub display_color: Rgb,
}

impl<'a> GhostView<'a> {
    #[must_use]
    pub fn new(ghost: &'a Ghost) -> Self {
        let display_color = match ghost.kind {
            GhostKind::Window => ghost.color,
            _ => GHOST_COLOR,
        };
        Self { ghost, display_color }
    }
}

#[derive(Debug, Serialize)]
pub struct MarqueeView {
    pub bounds: Aabb,
    pub color: Rgb,
    pub fill_alpha: f32,
}

impl MarqueeView {
    #[must_use]
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds, color: MARQUEE_COLOR, fill_alpha: MARQUEE_FILL_ALPHA }
    }
}
