//! Rendering configuration.
//!
//! [RenderConfig] groups the settings of both renderers. Every field has a
//! default, so a configuration file only needs to name what it changes:
//!
//! ```
//! use lineage_render::config::RenderConfig;
//!
//! let config = RenderConfig::from_json_str(r##"{ "raster": { "font_size": 20, "focal_color": "#ff8800" } }"##).unwrap();
//! assert_eq!(config.raster.font_size, 20.0);
//! assert_eq!(config.text.max_length, 2000);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Settings for both renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub text: TextConfig,
    pub raster: RasterConfig,
}

impl RenderConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Settings of the text renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Output budget in characters; longer output is cut off with `...`
    pub max_length: usize,
    /// Whether to draw box-drawing connectors between nodes
    pub draw_lines: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            // Size of a chat message
            max_length: 2000,
            draw_lines: true,
        }
    }
}

/// Settings of the layout engine and raster renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Horizontal space added to each measured label
    pub horizontal_padding: f64,
    /// Stroke width of edges and strike-through lines
    pub line_width: f64,
    pub background: Color,
    pub text_color: Color,
    /// Label color of the focal species
    pub focal_color: Color,
    /// Color of edges leading to ancestors of the focal species
    pub ancestor_edge_color: Color,
    pub edge_color: Color,
    /// Directory images are written to; created on first use
    pub output_dir: PathBuf,
}

impl Default for RasterConfig {
    fn default() -> Self {
        RasterConfig {
            font_family: "DejaVu Sans".to_string(),
            font_size: 16.0,
            horizontal_padding: 10.0,
            line_width: 2.0,
            background: Color::rgb(0x36, 0x39, 0x3f),
            text_color: Color::rgb(0xff, 0xff, 0xff),
            focal_color: Color::rgb(0xff, 0xd7, 0x00),
            ancestor_edge_color: Color::rgb(0xff, 0xff, 0xff),
            edge_color: Color::rgb(0x72, 0x76, 0x7d),
            output_dir: PathBuf::from("lineage"),
        }
    }
}

// =#========================================================================#=
// COLOR
// =#========================================================================#=
/// RGBA color, written as `#RRGGBB` or `#RRGGBBAA` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) || !(digits.len() == 6 || digits.len() == 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl fmt::Display for Color {
    /// Formats as `#rrggbb`, appending the alpha channel only if not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
