//! Tool settings and the persisted snapshot.
//!
//! [`PersistedState`] is the JSON blob written to storage:
//! `{"color": .., "size": .., "points": [..]}`. Decoding does no schema work
//! beyond what serde requires; malformed input is reported as
//! [`BoardError::Parse`] and never replaced with a default. Sizes are not
//! bounds checked: fractional, zero and negative values pass through.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize, Serializer};

use crate::config::BoardConfig;
use crate::consts::LINE_WIDTH_DIVISOR;
use crate::error::BoardError;
use crate::stroke::StrokeLog;

/// The live brush settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    /// Stroke color as any CSS color string.
    pub color: String,
    /// Brush size; the rendered line width is half of this.
    #[serde(serialize_with = "whole_as_integer")]
    pub size: f64,
}

impl ToolState {
    #[must_use]
    pub fn new(color: impl Into<String>, size: f64) -> Self {
        Self { color: color.into(), size }
    }

    /// Configured defaults: first palette color, first brush size.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.default_color(), f64::from(config.default_size()))
    }

    /// Rendered line width for this brush size.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        line_width_for(self.size)
    }
}

/// Line width the surface draws with for a given brush size.
#[must_use]
pub fn line_width_for(size: f64) -> f64 {
    size / LINE_WIDTH_DIVISOR
}

/// Write whole numbers without a fraction (`15`, not `15.0`), as browsers do.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp, clippy::trivially_copy_pass_by_ref)]
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Snapshot written to and read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub color: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub size: f64,
    pub points: StrokeLog,
}

impl PersistedState {
    /// Default snapshot: configured tool defaults and no points.
    #[must_use]
    pub fn empty(config: &BoardConfig) -> Self {
        Self {
            color: config.default_color().to_owned(),
            size: f64::from(config.default_size()),
            points: StrokeLog::new(),
        }
    }

    /// Borrowed view for encoding.
    #[must_use]
    pub fn view(&self) -> StateView<'_> {
        StateView { color: &self.color, size: self.size, points: &self.points }
    }
}

/// Borrowed snapshot, so live state can be encoded without cloning the log.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateView<'a> {
    pub color: &'a str,
    #[serde(serialize_with = "whole_as_integer")]
    pub size: f64,
    pub points: &'a StrokeLog,
}

/// Encode a snapshot as JSON.
///
/// # Errors
///
/// Returns [`BoardError::Encode`] if serde rejects the value.
pub fn serialize(state: &StateView<'_>) -> Result<String, BoardError> {
    serde_json::to_string(state).map_err(BoardError::Encode)
}

/// Decode a snapshot. `None` or an empty string yields [`PersistedState::empty`].
///
/// # Errors
///
/// Returns [`BoardError::Parse`] when `raw` is present but is not a valid snapshot.
pub fn deserialize(raw: Option<&str>, config: &BoardConfig) -> Result<PersistedState, BoardError> {
    match raw {
        None | Some("") => Ok(PersistedState::empty(config)),
        Some(raw) => serde_json::from_str(raw).map_err(BoardError::Parse),
    }
}
