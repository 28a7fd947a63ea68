//! Input model: tools, modifier keys, commands, and the gesture state machine.
//!
//! This module defines the types consumed by the input engine. `Tool` and
//! `Modifiers` capture the user's intent at the time of a pointer event.
//! `Command` is a discrete editor operation, usually produced from a key press
//! by [`command_for_key`]. `Gesture` is the active interaction being tracked
//! between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::Rgb;
use crate::geom::{Aabb, Point};
use crate::ghost::{Ghost, GhostKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Pick, marquee-select and drag objects (default).
    #[default]
    Select,
    /// Place a point on press.
    Point,
    /// Drag out a line.
    Line,
    /// Drag out a rectangle from one corner to the opposite one.
    Rectangle,
    /// Drag out an ellipse from its center.
    Ellipse,
    /// Sketch a freehand stroke.
    Freehand,
    /// Drag out new clipping window bounds.
    DefineWindow,
    /// Arrow keys move or resize the clipping window.
    MoveWindow,
}

impl Tool {
    /// The ghost a press opens with this tool, if it opens one.
    #[must_use]
    pub fn ghost_kind(self) -> Option<GhostKind> {
        match self {
            Self::Line => Some(GhostKind::Line),
            Self::Rectangle => Some(GhostKind::Rectangle),
            Self::Ellipse => Some(GhostKind::Ellipse),
            Self::Freehand => Some(GhostKind::Freehand),
            Self::DefineWindow => Some(GhostKind::Window),
            Self::Select | Self::Point | Self::MoveWindow => None,
        }
    }
}

/// Keyboard modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift: additive selection, clear-all, window resize.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl: clipboard and select-all shortcuts.
    #[serde(default)]
    pub ctrl: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Escape,
}

/// Arrow direction for nudges and window moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement of length `step` in scene space (Y up).
    #[must_use]
    pub fn offset(self, step: f64) -> Point {
        match self {
            Self::Up => Point::new(0.0, step),
            Self::Down => Point::new(0.0, -step),
            Self::Left => Point::new(-step, 0.0),
            Self::Right => Point::new(step, 0.0),
        }
    }
}

/// A discrete editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SelectAll,
    Copy,
    Paste,
    DeleteSelected,
    ClearAll,
    SetTool(Tool),
    SetColor(Rgb),
    ThickenStroke,
    ThinStroke,
    DisableWindow,
    RotateCcw,
    RotateCw,
    ScaleUp,
    ScaleDown,
    Nudge(Direction),
    MoveWindow(Direction),
    ResizeWindow(Direction),
}

/// Default key bindings. `tool` decides what the arrow keys drive.
#[must_use]
pub fn command_for_key(key: Key, modifiers: Modifiers, tool: Tool) -> Option<Command> {
    let arrow = match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        _ => None,
    };
    if let Some(dir) = arrow {
        return match tool {
            Tool::MoveWindow if modifiers.shift => Some(Command::ResizeWindow(dir)),
            Tool::MoveWindow => Some(Command::MoveWindow(dir)),
            Tool::Select => Some(Command::Nudge(dir)),
            _ => None,
        };
    }

    let ch = match key {
        Key::Delete | Key::Backspace if modifiers.shift => return Some(Command::ClearAll),
        Key::Delete | Key::Backspace => return Some(Command::DeleteSelected),
        Key::Escape => return Some(Command::SetTool(Tool::Select)),
        Key::Char(c) => c.to_ascii_lowercase(),
        _ => return None,
    };

    if modifiers.ctrl {
        return match ch {
            'a' => Some(Command::SelectAll),
            'c' => Some(Command::Copy),
            'v' => Some(Command::Paste),
            _ => None,
        };
    }

    match ch {
        'p' => Some(Command::SetTool(Tool::Point)),
        'l' => Some(Command::SetTool(Tool::Line)),
        'r' => Some(Command::SetTool(Tool::Rectangle)),
        'e' => Some(Command::SetTool(Tool::Ellipse)),
        'f' => Some(Command::SetTool(Tool::Freehand)),
        'c' => Some(Command::SetTool(Tool::DefineWindow)),
        'g' => Some(Command::SetTool(Tool::MoveWindow)),
        'd' => Some(Command::DisableWindow),
        '1' => Some(Command::SetColor(Rgb::BLACK)),
        '2' => Some(Command::SetColor(Rgb::RED)),
        '3' => Some(Command::SetColor(Rgb::GREEN)),
        '4' => Some(Command::SetColor(Rgb::BLUE)),
        '+' | '=' => Some(Command::ThickenStroke),
        '-' => Some(Command::ThinStroke),
        'q' => Some(Command::RotateCcw),
        'a' => Some(Command::RotateCw),
        'w' => Some(Command::ScaleUp),
        's' => Some(Command::ScaleDown),
        _ => None,
    }
}

/// The gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving every selected object with the pointer.
    DraggingSelection {
        /// Pointer position at the previous sample; deltas are taken from here.
        last: Point,
    },
    /// Rubber-band selection from `anchor` to `current`.
    Marquee { anchor: Point, current: Point },
    /// Drawing a new object or window.
    Drawing(Ghost),
}

impl Gesture {
    /// Normalized marquee rectangle, when a marquee is in progress.
    #[must_use]
    pub fn marquee(&self) -> Option<Aabb> {
        match self {
            Self::Marquee { anchor, current } => Some(Aabb::from_corners(*anchor, *current)),
            _ => None,
        }
    }

    /// The draw preview, when a draw gesture is in progress.
    #[must_use]
    pub fn ghost(&self) -> Option<&Ghost> {
        match self {
            Self::Drawing(ghost) => Some(ghost),
            _ => None,
        }
    }
}
