//! Editor tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PASTE_OFFSET: f64 = 15.0;
pub const DEFAULT_ROTATE_STEP_DEG: f64 = 5.0;
pub const DEFAULT_SCALE_UP: f64 = 1.1;
pub const DEFAULT_SCALE_DOWN: f64 = 0.9;
pub const DEFAULT_NUDGE_STEP: f64 = 5.0;
pub const DEFAULT_THICKNESS_STEP: f64 = 0.5;
pub const DEFAULT_ELLIPSE_SEGMENTS: usize = 100;

/// Error returned by [`EditorConfig::from_env`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The variable is set but is not a number.
    #[error("{var}: cannot parse '{value}'")]
    Parse { var: String, value: String },
    /// The variable parsed but is zero or negative.
    #[error("{var}: must be positive, got {value}")]
    OutOfRange { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Offset added to both translate axes of every pasted copy.
    pub paste_offset: f64,
    /// Rotation applied per rotate command, in degrees.
    pub rotate_step_deg: f64,
    /// Scale factor per scale-up command.
    pub scale_up: f64,
    /// Scale factor per scale-down command.
    pub scale_down: f64,
    /// Translation per nudge command; also the window move/resize step.
    pub nudge_step: f64,
    /// Stroke width change per thicken/thin command.
    pub thickness_step: f64,
    /// Samples used to tessellate an ellipse outline.
    pub ellipse_segments: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            paste_offset: DEFAULT_PASTE_OFFSET,
            rotate_step_deg: DEFAULT_ROTATE_STEP_DEG,
            scale_up: DEFAULT_SCALE_UP,
            scale_down: DEFAULT_SCALE_DOWN,
            nudge_step: DEFAULT_NUDGE_STEP,
            thickness_step: DEFAULT_THICKNESS_STEP,
            ellipse_segments: DEFAULT_ELLIPSE_SEGMENTS,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `VECSKETCH_PASTE_OFFSET`: default 15
    /// - `VECSKETCH_ROTATE_STEP_DEG`: default 5
    /// - `VECSKETCH_SCALE_UP`: default 1.1
    /// - `VECSKETCH_SCALE_DOWN`: default 0.9
    /// - `VECSKETCH_NUDGE_STEP`: default 5
    /// - `VECSKETCH_THICKNESS_STEP`: default 0.5
    /// - `VECSKETCH_ELLIPSE_SEGMENTS`: default 100
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to a non-numeric or
    /// non-positive value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            paste_offset: env_parse_f64("VECSKETCH_PASTE_OFFSET", DEFAULT_PASTE_OFFSET)?,
            rotate_step_deg: env_parse_f64("VECSKETCH_ROTATE_STEP_DEG", DEFAULT_ROTATE_STEP_DEG)?,
            scale_up: env_parse_f64("VECSKETCH_SCALE_UP", DEFAULT_SCALE_UP)?,
            scale_down: env_parse_f64("VECSKETCH_SCALE_DOWN", DEFAULT_SCALE_DOWN)?,
            nudge_step: env_parse_f64("VECSKETCH_NUDGE_STEP", DEFAULT_NUDGE_STEP)?,
            thickness_step: env_parse_f64("VECSKETCH_THICKNESS_STEP", DEFAULT_THICKNESS_STEP)?,
            ellipse_segments: env_parse_usize("VECSKETCH_ELLIPSE_SEGMENTS", DEFAULT_ELLIPSE_SEGMENTS)?,
        })
    }
}

fn env_parse_f64(key: &str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { var: key.to_string(), value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange { var: key.to_string(), value: raw });
    }
    Ok(value)
}

fn env_parse_usize(key: &str, default: usize) -> Result<usize, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::Parse { var: key.to_string(), value: raw.clone() })?;
    if value == 0 {
        return Err(ConfigError::OutOfRange { var: key.to_string(), value: raw });
    }
    Ok(value)
}
