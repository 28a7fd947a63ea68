//! Editor engine: the selection and manipulation controller.
//!
//! `EngineCore` owns all editor state (scene, selection, clipboard, clipping
//! window, tool, gesture) and is the only thing that mutates it. Input
//! handlers run to completion, return the [`Action`]s they caused for the host
//! to react to, and raise a redraw flag the host consumes once per frame with
//! [`EngineCore::take_redraw`].

use crate::clip::ClipWindow;
use crate::config::EditorConfig;
use crate::consts::{MIN_THICKNESS, WINDOW_GHOST_THICKNESS};
use crate::doc::{DocStore, Object, ObjectId, Rgb, Shape, ShapeKind};
use crate::geom::{Aabb, Point, Transform};
use crate::ghost::{Committed, Ghost};
use crate::hit;
use crate::input::{Button, Command, Direction, Gesture, Key, Modifiers, Tool, command_for_key};
use crate::render::{self, RenderItem};
use crate::selection::SelectionSet;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Non-error conditions the user should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Copy or delete was requested with nothing selected.
    NothingSelected,
    /// Paste was requested with an empty clipboard.
    ClipboardEmpty,
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectsCreated(Vec<ObjectId>),
    ObjectsUpdated(Vec<ObjectId>),
    ObjectsDeleted(Vec<ObjectId>),
    SelectionChanged,
    ClipboardFilled { count: usize },
    WindowChanged,
    ToolChanged(Tool),
    Notice(Notice),
}

/// Color and stroke width given to newly drawn objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgb,
    pub thickness: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: Rgb::BLACK, thickness: MIN_THICKNESS }
    }
}

/// Core engine state.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub selection: SelectionSet,
    /// Deep copies taken by the last copy, in scene order.
    pub clipboard: Vec<Object>,
    pub window: ClipWindow,
    pub tool: Tool,
    pub style: Style,
    pub gesture: Gesture,
    pub config: EditorConfig,
    redraw: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Redraw flag ---

    /// Return and clear the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // --- Pointer input ---

    /// Handle a pointer press at scene position `p`.
    pub fn on_pointer_down(&mut self, p: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.redraw = true;
        match self.tool {
            Tool::Select => self.press_select(p, modifiers),
            Tool::Point => match Shape::from_vertices(ShapeKind::Point, &[p]) {
                Ok(shape) => self.commit_shape(shape, self.style.color, self.style.thickness),
                Err(e) => {
                    tracing::warn!(error = %e, "point not created");
                    Vec::new()
                }
            },
            Tool::MoveWindow => Vec::new(),
            tool => {
                let (color, thickness) = match tool {
                    Tool::DefineWindow => (self.window.color, WINDOW_GHOST_THICKNESS),
                    _ => (self.style.color, self.style.thickness),
                };
                if let Some(kind) = tool.ghost_kind() {
                    self.gesture = Gesture::Drawing(Ghost::begin(kind, p, color, thickness));
                }
                Vec::new()
            }
        }
    }

    /// Handle pointer motion while a button is held.
    pub fn on_pointer_move(&mut self, p: Point) -> Vec<Action> {
        match &mut self.gesture {
            Gesture::Idle => Vec::new(),
            Gesture::DraggingSelection { last } => {
                let delta = p - *last;
                *last = p;
                self.redraw = true;
                self.transform_selected(|t| t.translate += delta)
            }
            Gesture::Marquee { current, .. } => {
                *current = p;
                self.redraw = true;
                Vec::new()
            }
            Gesture::Drawing(ghost) => {
                ghost.update(p);
                self.redraw = true;
                Vec::new()
            }
        }
    }

    /// Handle a pointer release. Always ends the current gesture.
    pub fn on_pointer_up(&mut self, _p: Point) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        self.redraw = true;
        match gesture {
            Gesture::Idle | Gesture::DraggingSelection { .. } => Vec::new(),
            Gesture::Marquee { anchor, current } => self.finish_marquee(Aabb::from_corners(anchor, current)),
            Gesture::Drawing(ghost) => self.finish_ghost(ghost),
        }
    }

    // --- Keyboard input ---

    /// Handle a key press through the default bindings.
    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        match command_for_key(key, modifiers, self.tool) {
            Some(command) => self.execute(command),
            None => Vec::new(),
        }
    }

    /// Run a discrete editor command.
    pub fn execute(&mut self, command: Command) -> Vec<Action> {
        self.redraw = true;
        match command {
            Command::SelectAll => self.select_all(),
            Command::Copy => self.copy_selected(),
            Command::Paste => self.paste(),
            Command::DeleteSelected => self.delete_selected(),
            Command::ClearAll => self.clear_all(),
            Command::SetTool(tool) => {
                self.tool = tool;
                tracing::debug!(?tool, "tool changed");
                vec![Action::ToolChanged(tool)]
            }
            Command::SetColor(color) => {
                self.style.color = color;
                Vec::new()
            }
            Command::ThickenStroke => {
                self.style.thickness += self.config.thickness_step;
                tracing::debug!(thickness = self.style.thickness, "stroke width");
                Vec::new()
            }
            Command::ThinStroke => {
                self.style.thickness = (self.style.thickness - self.config.thickness_step).max(MIN_THICKNESS);
                tracing::debug!(thickness = self.style.thickness, "stroke width");
                Vec::new()
            }
            Command::DisableWindow => {
                self.window.active = false;
                vec![Action::WindowChanged]
            }
            Command::RotateCcw => {
                let step = self.config.rotate_step_deg;
                self.transform_selected(|t| t.rotate += step)
            }
            Command::RotateCw => {
                let step = self.config.rotate_step_deg;
                self.transform_selected(|t| t.rotate -= step)
            }
            Command::ScaleUp => {
                let factor = self.config.scale_up;
                self.transform_selected(|t| t.scale_by(factor))
            }
            Command::ScaleDown => {
                let factor = self.config.scale_down;
                self.transform_selected(|t| t.scale_by(factor))
            }
            Command::Nudge(dir) => {
                if self.tool != Tool::Select {
                    return Vec::new();
                }
                let delta = dir.offset(self.config.nudge_step);
                self.transform_selected(|t| t.translate += delta)
            }
            Command::MoveWindow(dir) => self.move_window(dir),
            Command::ResizeWindow(dir) => self.resize_window(dir),
        }
    }

    // --- Operations ---

    /// Select every object in the scene.
    pub fn select_all(&mut self) -> Vec<Action> {
        self.selection.replace(self.doc.ids());
        tracing::info!(count = self.selection.len(), "selected all");
        vec![Action::SelectionChanged]
    }

    /// Replace the clipboard with deep copies of the selection.
    pub fn copy_selected(&mut self) -> Vec<Action> {
        let ids = self.selection.in_scene_order(&self.doc);
        if ids.is_empty() {
            tracing::info!("nothing selected to copy");
            return vec![Action::Notice(Notice::NothingSelected)];
        }
        self.clipboard = self.doc.snapshot(&ids);
        let count = self.clipboard.len();
        tracing::info!(count, "objects copied to clipboard");
        vec![Action::ClipboardFilled { count }]
    }

    /// Paste the clipboard, offset from the previous paste, and select the copies.
    pub fn paste(&mut self) -> Vec<Action> {
        if self.clipboard.is_empty() {
            tracing::info!("clipboard empty");
            return vec![Action::Notice(Notice::ClipboardEmpty)];
        }
        let offset = Point::new(self.config.paste_offset, self.config.paste_offset);
        for entry in &mut self.clipboard {
            entry.transform.translate += offset;
        }
        let ids = self.doc.insert(&self.clipboard);
        self.selection.replace(ids.iter().copied());
        tracing::info!(count = ids.len(), "objects pasted");
        vec![Action::ObjectsCreated(ids), Action::SelectionChanged]
    }

    /// Remove every selected object.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let ids = self.selection.in_scene_order(&self.doc);
        if ids.is_empty() {
            self.selection.clear();
            tracing::info!("nothing selected to delete");
            return vec![Action::Notice(Notice::NothingSelected)];
        }
        let removed: Vec<ObjectId> = self.doc.remove(&ids).iter().map(|o| o.id).collect();
        self.selection.clear();
        tracing::info!(count = removed.len(), "selected objects deleted");
        vec![Action::ObjectsDeleted(removed), Action::SelectionChanged]
    }

    /// Remove every object in the scene.
    pub fn clear_all(&mut self) -> Vec<Action> {
        let ids = self.doc.ids();
        self.doc.clear();
        self.selection.clear();
        tracing::info!(count = ids.len(), "scene cleared");
        if ids.is_empty() {
            return Vec::new();
        }
        vec![Action::ObjectsDeleted(ids), Action::SelectionChanged]
    }

    // --- Queries ---

    /// Resolved per-object display state, bottom to top.
    #[must_use]
    pub fn render_items(&self) -> Vec<RenderItem<'_>> {
        render::items(&self.doc, &self.selection, &self.window)
    }

    /// World-space, window-clipped stroke paths for one object.
    #[must_use]
    pub fn stroke_paths(&self, id: &ObjectId) -> Vec<Vec<Point>> {
        self.doc
            .get(id)
            .map(|obj| render::stroke_paths(obj, &self.window, self.config.ellipse_segments))
            .unwrap_or_default()
    }

    /// The draw preview, if a draw gesture is in progress.
    #[must_use]
    pub fn ghost(&self) -> Option<&Ghost> {
        self.gesture.ghost()
    }

    #[must_use]
    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    /// The marquee rectangle, if a marquee gesture is in progress.
    #[must_use]
    pub fn marquee(&self) -> Option<Aabb> {
        self.gesture.marquee()
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&Object> {
        self.doc.get(id)
    }

    /// Selected ids in scene order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ObjectId> {
        self.selection.in_scene_order(&self.doc)
    }

    // --- Internals ---

    fn press_select(&mut self, p: Point, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.shift {
            let on_selected = self
                .doc
                .iter_rev()
                .filter(|o| self.selection.contains(&o.id))
                .any(|o| hit::is_point_on_object(p, o));
            if on_selected {
                self.gesture = Gesture::DraggingSelection { last: p };
                return Vec::new();
            }
        }

        match hit::pick(&self.doc, p) {
            Some(id) if modifiers.shift => {
                let now_selected = self.selection.toggle(id);
                tracing::debug!(%id, now_selected, "selection toggled");
                vec![Action::SelectionChanged]
            }
            Some(id) => {
                self.selection.replace([id]);
                vec![Action::SelectionChanged]
            }
            None => {
                self.gesture = Gesture::Marquee { anchor: p, current: p };
                if modifiers.shift || self.selection.is_empty() {
                    return Vec::new();
                }
                self.selection.clear();
                vec![Action::SelectionChanged]
            }
        }
    }

    fn finish_marquee(&mut self, marquee: Aabb) -> Vec<Action> {
        let before = self.selection.len();
        let hits: Vec<ObjectId> = self
            .doc
            .iter()
            .filter(|o| o.aabb().is_some_and(|b| marquee.overlaps(&b)))
            .map(|o| o.id)
            .collect();
        for id in hits {
            self.selection.insert(id);
        }
        tracing::info!(count = self.selection.len(), "objects selected");
        if self.selection.len() == before {
            return Vec::new();
        }
        vec![Action::SelectionChanged]
    }

    fn finish_ghost(&mut self, ghost: Ghost) -> Vec<Action> {
        let (color, thickness) = (ghost.color, ghost.thickness);
        match ghost.commit() {
            Ok(Committed::Shape(shape)) => self.commit_shape(shape, color, thickness),
            Ok(Committed::Window(bounds)) => {
                self.window.bounds = bounds;
                self.window.active = true;
                self.tool = Tool::Select;
                tracing::info!(
                    xmin = bounds.min_x,
                    ymin = bounds.min_y,
                    xmax = bounds.max_x,
                    ymax = bounds.max_y,
                    "clipping window defined"
                );
                vec![Action::WindowChanged, Action::ToolChanged(Tool::Select)]
            }
            Err(e) => {
                tracing::warn!(error = %e, "draw gesture discarded");
                Vec::new()
            }
        }
    }

    fn commit_shape(&mut self, shape: Shape, color: Rgb, thickness: f64) -> Vec<Action> {
        let kind = shape.kind();
        let id = self.doc.append(Object::new(shape, color, thickness));
        self.selection.replace([id]);
        tracing::debug!(%id, kind = kind.name(), "object created");
        vec![Action::ObjectsCreated(vec![id]), Action::SelectionChanged]
    }

    /// Apply `f` to the transform of every selected object, each about its own pivot.
    fn transform_selected(&mut self, mut f: impl FnMut(&mut Transform)) -> Vec<Action> {
        let ids = self.selection.in_scene_order(&self.doc);
        if ids.is_empty() {
            return Vec::new();
        }
        for id in &ids {
            if let Some(obj) = self.doc.get_mut(id) {
                f(&mut obj.transform);
            }
        }
        vec![Action::ObjectsUpdated(ids)]
    }

    fn move_window(&mut self, dir: Direction) -> Vec<Action> {
        if self.tool != Tool::MoveWindow || !self.window.active {
            return Vec::new();
        }
        self.window.bounds = self.window.bounds.translated(dir.offset(self.config.nudge_step));
        vec![Action::WindowChanged]
    }

    /// Move one window edge: Up/Down move the top edge, Left moves the left
    /// edge out, Right moves the right edge out. Refused if it would invert.
    fn resize_window(&mut self, dir: Direction) -> Vec<Action> {
        if self.tool != Tool::MoveWindow || !self.window.active {
            return Vec::new();
        }
        let step = self.config.nudge_step;
        let mut bounds = self.window.bounds;
        match dir {
            Direction::Up => bounds.max_y += step,
            Direction::Down => bounds.max_y -= step,
            Direction::Left => bounds.min_x -= step,
            Direction::Right => bounds.max_x += step,
        }
        if bounds.max_x < bounds.min_x || bounds.max_y < bounds.min_y {
            tracing::debug!(?dir, "window resize refused");
            return Vec::new();
        }
        self.window.bounds = bounds;
        vec![Action::WindowChanged]
    }
}
