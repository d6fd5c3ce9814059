//! Tunables of the map explorer.
//!
//! Every field has a default matching the shipped world map (a 2000x857 SVG
//! canvas). A JSON document only needs to name the fields it overrides:
//!
//! ```
//! use explorer_common::ExplorerConfig;
//!
//! let config = ExplorerConfig::from_json(r#"{"zoom": {"min": 1, "max": 4}}"#).unwrap();
//! assert_eq!(config.zoom.max, 4.0);
//! assert_eq!(config.canvas.width, 2000.0);
//! ```

use crate::errors::ExplorerError;
use crate::viewport::{CanvasSize, ZoomBounds};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANVAS_WIDTH: f64 = 2000.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 857.0;
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;
pub const DEFAULT_MAX_ZOOM: f64 = 8.0;
pub const DEFAULT_MARGIN_FACTOR: f64 = 0.9;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Fill colours of the three shape states, plus the outline colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub default: String,
    pub hover: String,
    pub selected: String,
    pub stroke: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: "#D9D9D9".to_string(),
            hover: "#B8B8B8".to_string(),
            selected: "#5F1111".to_string(),
            stroke: "#0D0D0D".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub canvas: CanvasSize,
    pub zoom: ZoomBounds,
    /// Share of the canvas the framed country may fill.
    pub margin_factor: f64,
    /// Delay between highlighting a selection and framing it.
    pub frame_delay_ms: u64,
    /// Delay before the content panel is scrolled into view, after the zoom settled.
    pub scroll_delay_ms: u64,
    pub frame_duration_ms: u64,
    /// Multiplicative step of the zoom in / zoom out buttons.
    pub zoom_step: f64,
    pub zoom_step_duration_ms: u64,
    pub reset_duration_ms: u64,
    pub suggestion_limit: usize,
    pub palette: Palette,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: DEFAULT_CANVAS_WIDTH,
                height: DEFAULT_CANVAS_HEIGHT,
            },
            zoom: ZoomBounds {
                min: DEFAULT_MIN_ZOOM,
                max: DEFAULT_MAX_ZOOM,
            },
            margin_factor: DEFAULT_MARGIN_FACTOR,
            frame_delay_ms: 100,
            scroll_delay_ms: 800,
            frame_duration_ms: 750,
            zoom_step: 1.5,
            zoom_step_duration_ms: 300,
            reset_duration_ms: 500,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            palette: Palette::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        let config: ExplorerConfig = serde_json::from_str(json)
            .map_err(|e| ExplorerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExplorerError> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(ExplorerError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.zoom.min > 0.0) || self.zoom.min > self.zoom.max {
            return Err(ExplorerError::InvalidConfig(format!(
                "zoom bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.zoom.min, self.zoom.max
            )));
        }
        if !(self.margin_factor > 0.0 && self.margin_factor <= 1.0) {
            return Err(ExplorerError::InvalidConfig(format!(
                "margin factor must lie in (0, 1], got {}",
                self.margin_factor
            )));
        }
        if !(self.zoom_step > 1.0) {
            return Err(ExplorerError::InvalidConfig(format!(
                "zoom step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        if self.suggestion_limit == 0 {
            return Err(ExplorerError::InvalidConfig(
                "suggestion limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
