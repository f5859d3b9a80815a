//! Lineage-render is a library to draw the evolutionary lineage of a species,
//! either as a compact text diagram or as a raster image.
//!
//! Core functionality provided:
//! - Tree model: [GenTree](model::GenTree), an arena-backed ownership tree
//!   with ordered children, parent indices and stack-based pre-/post-order
//!   traversal; [LineageTree](model::LineageTree) carries species per node.
//! - Text: one line per species with date column, extinction glyph and
//!   optional box-drawing connectors, cut off at a character budget.
//!   See [crate::text].
//! - Layout: top-down placement with sibling subtree overlap correction,
//!   parents centered over their children. See [crate::layout].
//! - Raster: painting of the laid out tree with highlighted focal species and
//!   emphasized ancestor edges, written as PNG. See [crate::raster].
//! - Configuration: [RenderConfig](config::RenderConfig), loadable from JSON.
//!
//! Limitations:
//! - Trees are taken as given; building them from ancestry records, and
//!   rejecting cycles, is up to the caller.
//! - Label sizes are estimated from character counts, not from font files.
//!
//! # Usage patterns
//! 1. The quick API functions [render_text] and [render_image] use default
//!    settings.
//! 2. Configure a [TextRenderer](text::TextRenderer) or a
//!    [RasterRenderer](raster::RasterRenderer) for full control.
//!
//! ## Example
//! ```
//! use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
//!
//! let root = Species::new(SpeciesId(1), "P. primus", 0).with_extinct(true);
//! let mut tree = LineageTree::with_root(LineageNodeData::ancestor(root));
//! let a = tree.add_child(0, LineageNodeData::descendant(Species::new(SpeciesId(2), "P. alter", 86_400)));
//! tree.add_child(a, LineageNodeData::descendant(Species::new(SpeciesId(3), "P. tertius", 172_800)));
//! tree.add_child(0, LineageNodeData::descendant(Species::new(SpeciesId(4), "P. quartus", 259_200)));
//!
//! let text = lineage_render::render_text(Some(&tree), 2000, true);
//! assert_eq!(
//!     text,
//!     "1/1/1970 * P. primus\n\
//!      1/2/1970 - ├─P. alter\n\
//!      1/3/1970 - │ └─P. tertius\n\
//!      1/4/1970 - └─P. quartus"
//! );
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod raster;
pub mod text;

use crate::config::RasterConfig;
use crate::error::RenderError;
use crate::model::{LineageTree, SpeciesId};
use std::path::PathBuf;

// ============================================================================
// Quick Text API
// ============================================================================
/// Renders a lineage tree as text with the default date format.
///
/// See [`text::render_text`] for full documentation.
pub fn render_text(tree: Option<&LineageTree>, max_length: usize, draw_lines: bool) -> String {
    text::render_text(tree, max_length, draw_lines, None)
}

// ============================================================================
// Quick Raster API
// ============================================================================
/// Renders a lineage tree to a PNG file in the default output directory,
/// returning its path.
///
/// See [`raster::render_image`] for full documentation.
pub fn render_image(tree: &LineageTree, focal: SpeciesId) -> Result<PathBuf, RenderError> {
    raster::render_image(tree, focal, &RasterConfig::default())
}
