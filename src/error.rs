//! Error types of the rendering pipeline.
//!
//! Text rendering is infallible: an absent tree yields an empty string and an
//! exhausted length budget yields a `...` marker. Only raster output, which
//! touches fonts, encoders and the file system, and configuration loading can
//! fail.

use resvg::usvg;
use thiserror::Error;

/// Errors raised while producing or persisting a raster image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the image or creating its directory failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    /// The recorded drawing could not be converted for rasterization.
    #[error("invalid drawing: {0}")]
    Svg(#[from] usvg::Error),
    /// PNG encoding of the rasterized canvas failed.
    #[error("failed to encode png: {0}")]
    Encode(String),
    /// A pixel buffer of the requested size could not be allocated.
    #[error("cannot allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },
}

/// Errors raised while loading a [RenderConfig](crate::config::RenderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}
