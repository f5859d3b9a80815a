//! Raster images of lineage trees.
//!
//! # Quick API
//! * [`render_image`] - lays out, paints and saves a tree with a given
//!   configuration, returning the image path
//!
//! # Full API
//! A [`RasterRenderer`] combines
//! * [`FontMetrics`] - sizes labels for the [layout engine](crate::layout)
//! * a [`Canvas`] - receives the drawing; [`SvgCanvas`] records it as SVG
//! * an [`ImageStore`] - persists the canvas; [`PngStore`] rasterizes with
//!   `resvg` and writes a PNG file

pub mod canvas;
pub mod metrics;
pub mod renderer;
pub mod store;

pub use self::canvas::{Canvas, Point, SvgCanvas};
pub use self::metrics::FontMetrics;
pub use self::renderer::RasterRenderer;
pub use self::store::{ImageStore, PngStore};

use crate::config::RasterConfig;
use crate::error::RenderError;
use crate::model::{LineageTree, SpeciesId};
use std::path::PathBuf;

/// Renders `tree` to a PNG image named after the focal species inside
/// `config.output_dir` and returns its path.
pub fn render_image(
    tree: &LineageTree,
    focal: SpeciesId,
    config: &RasterConfig,
) -> Result<PathBuf, RenderError> {
    RasterRenderer::new(config.clone()).render(tree, focal)
}
