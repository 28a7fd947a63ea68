//! One editing session: the engine plus the host window it is shown in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io::BufRead;

use canvas::config::EditorConfig;
use canvas::engine::{Action, EngineCore};
use canvas::geom::Point;
use canvas::viewport::Viewport;

use crate::event::{self, HostError, HostEvent};
use crate::view::{GhostView, MarqueeView, RenderView, ViewObject};

#[derive(Debug, Default)]
pub struct Session {
    pub engine: EngineCore,
    pub viewport: Viewport,
}

impl Session {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { engine: EngineCore::with_config(config), viewport: Viewport::default() }
    }

    /// Feed one host event to the engine, converting window pixels to scene
    /// coordinates first.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownKey`] for a key event with an unmapped name.
    pub fn dispatch(&mut self, ev: HostEvent) -> Result<Vec<Action>, HostError> {
        let modifiers = ev.modifiers();
        let actions = match ev {
            HostEvent::PointerDown { x, y, button, .. } => {
                let p = self.scene_point(x, y);
                self.engine.on_pointer_down(p, button, modifiers)
            }
            HostEvent::PointerMove { x, y } => {
                let p = self.scene_point(x, y);
                self.engine.on_pointer_move(p)
            }
            HostEvent::PointerUp { x, y } => {
                let p = self.scene_point(x, y);
                self.engine.on_pointer_up(p)
            }
            HostEvent::Key { key, .. } => {
                let key = event::parse_key(&key)?;
                self.engine.on_key_down(key, modifiers)
            }
            HostEvent::Resize { width, height } => {
                self.viewport.resize(width, height);
                tracing::debug!(width, height, "viewport resized");
                Vec::new()
            }
        };
        for action in &actions {
            match action {
                Action::Notice(notice) => tracing::info!(?notice, "editor notice"),
                other => tracing::trace!(action = ?other, "engine action"),
            }
        }
        if self.engine.take_redraw() {
            tracing::trace!("redraw requested");
        }
        Ok(actions)
    }

    /// Dispatch every event line from `input`, returning how many were applied.
    ///
    /// Lines that are not UTF-8, are not a known event, or are rejected by
    /// [`Session::dispatch`] are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`] when reading `input` fails.
    pub fn drain(&mut self, input: impl BufRead) -> Result<usize, HostError> {
        let mut applied = 0usize;
        for (idx, raw) in input.split(b'\n').enumerate() {
            let line = idx + 1;
            let ev = match event::decode_bytes(line, raw?) {
                Ok(Some(ev)) => ev,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping input line");
                    continue;
                }
            };
            if let Err(e) = self.dispatch(ev) {
                tracing::warn!(line, error = %e, "event rejected");
                continue;
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Resolved render state, bottom to top, with clipped stroke paths.
    #[must_use]
    pub fn view(&self) -> RenderView<'_> {
        let objects = self
            .engine
            .render_items()
            .into_iter()
            .map(|item| {
                let paths = self.engine.stroke_paths(&item.id);
                ViewObject { item, paths }
            })
            .collect();
        RenderView {
            tool: self.engine.tool,
            window: self.engine.window(),
            objects,
            ghost: self.engine.ghost().map(GhostView::new),
            marquee: self.engine.marquee().map(MarqueeView::new),
        }
    }

    fn scene_point(&self, x: f64, y: f64) -> Point {
        self.viewport.window_to_scene(Point::new(x, y))
    }
}
