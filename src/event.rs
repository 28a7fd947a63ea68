//! Host input events, one JSON object per stdin line.
//!
//! Coordinates are window pixels with Y down, exactly as a windowing toolkit
//! reports them. [`crate::session::Session`] flips them into scene space.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use canvas::input::{Button, Key, Modifiers};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Utf8 {
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
    #[error("failed to write render view: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A raw host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
}

impl HostEvent {
    /// Modifier state carried by pointer-down and key events.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match *self {
            Self::PointerDown { shift, ctrl, .. } | Self::Key { shift, ctrl, .. } => Modifiers { shift, ctrl },
            _ => Modifiers::default(),
        }
    }
}

/// Decode one input line. `line` is 1-based and only used for error context.
///
/// # Errors
///
/// Returns [`HostError::Decode`] if the line is not a known event.
pub fn decode(line: usize, text: &str) -> Result<HostEvent, HostError> {
    serde_json::from_str(text).map_err(|source| HostError::Decode { line, source })
}

/// Decode one raw input line, which must be UTF-8.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns [`HostError::Utf8`] for invalid UTF-8 and [`HostError::Decode`]
/// for anything that is not a known event.
pub fn decode_bytes(line: usize, raw: Vec<u8>) -> Result<Option<HostEvent>, HostError> {
    let text = String::from_utf8(raw).map_err(|source| HostError::Utf8 { line, source })?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    decode(line, text).map(Some)
}

/// Map a key name to an engine key.
///
/// Accepts the browser-style names (`ArrowUp`, `Delete`, `Escape`, ...) in
/// any case, `Esc` and `Del` as short forms, and any single character.
///
/// # Errors
///
/// Returns [`HostError::UnknownKey`] for anything else.
pub fn parse_key(name: &str) -> Result<Key, HostError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }
    match name.to_ascii_lowercase().as_str() {
        "arrowup" | "up" => Ok(Key::ArrowUp),
        "arrowdown" | "down" => Ok(Key::ArrowDown),
        "arrowleft" | "left" => Ok(Key::ArrowLeft),
        "arrowright" | "right" => Ok(Key::ArrowRight),
        "delete" | "del" => Ok(Key::Delete),
        "backspace" => Ok(Key::Backspace),
        "escape" | "esc" => Ok(Key::Escape),
        _ => Err(HostError::UnknownKey(name.to_string())),
    }
}
