//! Rasterizer configuration.
//!
//! ```toml
//! width = 640
//! height = 480
//! backface_culling = true
//! viewport_culling = true
//! fill_color = { r = 0, g = 128, b = 255, a = 255 }
//! ```
//!
//! `width` and `height` are required; everything else has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::error::ConfigError;

fn default_true() -> bool {
    true
}

fn default_fill_color() -> Color {
    Color::FILL
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_true")]
    pub backface_culling: bool,
    #[serde(default = "default_true")]
    pub viewport_culling: bool,
}

impl RasterConfig {
    /// Default options for a `width` x `height` target.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill_color: default_fill_color(),
            backface_culling: true,
            viewport_culling: true,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
