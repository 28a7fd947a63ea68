//! Scene geometry engine for the vecsketch 2D vector editor.
//!
//! This crate owns the editor's state and rules: which primitives exist, how
//! their transforms map between local and world space, what a pointer press
//! hits, how a marquee or drag changes the selection, and how strokes clip
//! against the clipping window. It never draws; a host feeds it input events
//! and reads back the resolved render view.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: input handlers, commands, and queries |
//! | [`doc`] | Shapes, objects, and the ordered scene store |
//! | [`geom`] | Points, per-object transforms, bounding boxes |
//! | [`hit`] | Inverse-transform hit testing and picking |
//! | [`clip`] | Cohen-Sutherland and sampled-curve clipping, the clipping window |
//! | [`selection`] | The selected-id set |
//! | [`ghost`] | In-progress draw preview |
//! | [`input`] | Tools, modifiers, keys, commands, gesture state machine |
//! | [`render`] | Read-only resolved view for the external renderer |
//! | [`viewport`] | Window-pixel to scene coordinate conversion |
//! | [`config`] | Tunable step sizes, read from the environment |
//! | [`consts`] | Shared numeric and color constants |

pub mod clip;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod ghost;
pub mod hit;
pub mod input;
pub mod render;
pub mod selection;
pub mod viewport;
