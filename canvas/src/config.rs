//! Board configuration: tool panels, storage key and stroke policy.
//!
//! The host builds a [`BoardConfig`] from string settings (the app reads the
//! canvas element's `data-*` attributes). Every key is optional:
//! - `palette`: comma-separated colors, default `black,green,blue,yellow,brown`
//! - `brushes`: comma-separated brush sizes, default `10,15,20`
//! - `storage-key`: persisted snapshot key, default `state`
//! - `stroke-policy`: `permissive` (default) or `strict`
//!
//! The default color and size are always the first palette and brush entries.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{BRUSH_SIZES, PALETTE, STATE_KEY};
use crate::error::BoardError;
use crate::stroke::StrokePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Colors offered by the palette panel, in display order.
    pub palette: Vec<String>,
    /// Brush sizes offered by the brushes panel, in display order.
    pub brush_sizes: Vec<u32>,
    /// Storage key for the persisted snapshot.
    pub storage_key: String,
    /// Validation applied to stroke logs loaded from storage.
    pub stroke_policy: StrokePolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            brush_sizes: BRUSH_SIZES.to_vec(),
            storage_key: STATE_KEY.to_owned(),
            stroke_policy: StrokePolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Build config from a key lookup, falling back to defaults for absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] for empty lists, unparsable brush sizes,
    /// an empty storage key, or an unknown stroke policy.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("palette") {
            config.palette = parse_palette(&raw)?;
        }
        if let Some(raw) = lookup("brushes") {
            config.brush_sizes = parse_brushes(&raw)?;
        }
        if let Some(raw) = lookup("storage-key") {
            let key = raw.trim();
            if key.is_empty() {
                return Err(BoardError::Config("storage-key must not be empty".into()));
            }
            config.storage_key = key.to_owned();
        }
        config.stroke_policy = parse_stroke_policy(lookup("stroke-policy").as_deref())?;
        Ok(config)
    }

    /// Color applied on startup and after a clear.
    #[must_use]
    pub fn default_color(&self) -> &str {
        self.palette.first().map_or(PALETTE[0], String::as_str)
    }

    /// Brush size applied on startup and after a clear.
    #[must_use]
    pub fn default_size(&self) -> u32 {
        self.brush_sizes.first().copied().unwrap_or(BRUSH_SIZES[0])
    }
}

fn parse_palette(raw: &str) -> Result<Vec<String>, BoardError> {
    let colors: Vec<String> = split_list(raw).map(str::to_owned).collect();
    if colors.is_empty() {
        return Err(BoardError::Config("palette must list at least one color".into()));
    }
    Ok(colors)
}

fn parse_brushes(raw: &str) -> Result<Vec<u32>, BoardError> {
    let sizes = split_list(raw)
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| BoardError::Config(format!("invalid brush size '{s}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err(BoardError::Config("brushes must list at least one size".into()));
    }
    Ok(sizes)
}

fn parse_stroke_policy(raw: Option<&str>) -> Result<StrokePolicy, BoardError> {
    match raw.map(str::trim).unwrap_or("permissive") {
        "permissive" => Ok(StrokePolicy::Permissive),
        "strict" => Ok(StrokePolicy::Strict),
        other => Err(BoardError::Config(format!(
            "unknown stroke-policy '{other}' (expected 'permissive' or 'strict')"
        ))),
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
