//! Geometric layout of lineage trees.
//!
//! The [LayoutEngine] turns a tree plus measured label sizes into a
//! [Layout]: one [RenderBounds] per node such that
//! * sibling subtrees never overlap horizontally,
//! * every parent is centered over the span of its children's subtrees,
//! * children sit `1.5 ×` their parent's height below its bottom edge,
//! * the smallest `x` coordinate is `0`.
//!
//! Label sizes come from a [TextMeasure] implementation, e.g.
//! [FontMetrics](crate::raster::FontMetrics).

pub mod bounds;
pub mod engine;
pub mod measure;

pub use bounds::{Layout, RenderBounds};
pub use engine::LayoutEngine;
pub use measure::{LabelSize, TextMeasure};
