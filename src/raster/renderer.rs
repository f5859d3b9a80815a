//! Painting of laid out lineage trees.

use crate::config::RasterConfig;
use crate::error::RenderError;
use crate::layout::{Layout, LayoutEngine};
use crate::model::{LineageTree, Species, SpeciesId};
use crate::raster::canvas::{Canvas, Point, SvgCanvas};
use crate::raster::metrics::FontMetrics;
use crate::raster::store::{ImageStore, PngStore};
use std::path::PathBuf;
use tracing::{debug, info};

/// File extension of written images
const IMAGE_EXTENSION: &str = "png";

// =$========================================================================$=
// RASTER RENDERER
// =$========================================================================$=
/// Lays out a [LineageTree], paints it and persists the image.
///
/// Painting, in pre-order:
/// * extinct species are struck through at the vertical center of their label
/// * labels are drawn in the focal color for the focal species, otherwise in
///   the text color
/// * an arrow runs from the bottom center of each parent to the top center of
///   each child, in the ancestor color if the child is on the ancestor path,
///   otherwise in the muted edge color
///
/// # Example
/// ```no_run
/// use lineage_render::config::RasterConfig;
/// use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
/// use lineage_render::raster::RasterRenderer;
///
/// let species = Species::new(SpeciesId(1), "A. vulgaris", 0);
/// let tree = LineageTree::with_root(LineageNodeData::ancestor(species));
///
/// let path = RasterRenderer::new(RasterConfig::default()).render(&tree, SpeciesId(1))?;
/// println!("wrote {}", path.display());
/// # Ok::<(), lineage_render::error::RenderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RasterRenderer<S = PngStore> {
    config: RasterConfig,
    metrics: FontMetrics,
    store: S,
}

impl RasterRenderer<PngStore> {
    /// Creates a renderer writing PNG files as configured.
    pub fn new(config: RasterConfig) -> Self {
        RasterRenderer {
            metrics: FontMetrics::from_config(&config),
            config,
            store: PngStore::default(),
        }
    }
}

impl<S: ImageStore> RasterRenderer<S> {
    /// Replaces the persistence backend.
    pub fn with_store<T: ImageStore>(self, store: T) -> RasterRenderer<T> {
        RasterRenderer {
            config: self.config,
            metrics: self.metrics,
            store,
        }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Computes the layout used for painting `tree`.
    pub fn layout(&self, tree: &LineageTree) -> Layout {
        LayoutEngine::new(self.config.horizontal_padding).layout(tree, &self.metrics)
    }

    /// Lays out and paints `tree`, then saves the image below the configured
    /// output directory, named after the focal species.
    ///
    /// # Errors
    /// Fails if the drawing cannot be rasterized or the file cannot be
    /// written; I/O errors are passed on unchanged.
    pub fn render(&self, tree: &LineageTree, focal: SpeciesId) -> Result<PathBuf, RenderError> {
        let layout = self.layout(tree);
        let canvas = self.paint(tree, &layout, focal);

        let path = self.output_path(focal_species(tree, focal));
        debug!(
            nodes = tree.len(),
            width = canvas.width(),
            height = canvas.height(),
            path = %path.display(),
            "painted lineage tree"
        );

        self.store.save(canvas, &path)?;
        info!(path = %path.display(), "saved lineage image");
        Ok(path)
    }

    /// Paints `tree` onto a new canvas sized to fit `layout`.
    pub fn paint(&self, tree: &LineageTree, layout: &Layout, focal: SpeciesId) -> SvgCanvas {
        let extent = layout.tree_bounds();
        let width = (extent.right().ceil() as u32).max(1);
        let height = (extent.bottom().ceil() as u32).max(1);

        let mut canvas = SvgCanvas::new(
            width,
            height,
            self.metrics.font_family(),
            self.metrics.font_size(),
        );
        self.draw(tree, layout, focal, &mut canvas);
        canvas
    }

    /// Draws `tree` onto any [Canvas].
    pub fn draw<C: Canvas>(&self, tree: &LineageTree, layout: &Layout, focal: SpeciesId, canvas: &mut C) {
        let config = &self.config;
        let inset = config.horizontal_padding / 2.0;
        canvas.clear(config.background);

        for node in tree.pre_order_iter() {
            let bounds = layout.bounds(node.index());
            let species = &node.data().species;
            let text_color = if species.id() == focal {
                config.focal_color
            } else {
                config.text_color
            };

            if species.is_extinct() {
                let y = bounds.center_y();
                canvas.draw_line(
                    Point::new(bounds.left() + inset, y),
                    Point::new(bounds.right() - inset, y),
                    text_color,
                    config.line_width,
                );
            }
            canvas.draw_text(species.short_display_name(), bounds, text_color);

            for &child in node.children() {
                let child_bounds = layout.bounds(child);
                let edge_color = if tree[child].data().is_ancestor {
                    config.ancestor_edge_color
                } else {
                    config.edge_color
                };
                canvas.draw_arrow(
                    Point::new(bounds.center_x(), bounds.bottom()),
                    Point::new(child_bounds.center_x(), child_bounds.top()),
                    edge_color,
                    config.line_width,
                );
            }
        }
    }

    /// Path of the image written for `species`.
    pub fn output_path(&self, species: &Species) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.{IMAGE_EXTENSION}", file_stem(species.short_display_name())))
    }
}

/// The focal species if it is part of `tree`, otherwise the root species.
fn focal_species(tree: &LineageTree, focal: SpeciesId) -> &Species {
    tree.pre_order_iter()
        .map(|node| &node.data().species)
        .find(|species| species.id() == focal)
        .unwrap_or(&tree.root().data().species)
}

/// Lowercased `name` with everything but ASCII letters, digits, `-` and `_`
/// replaced by `_`.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() { "lineage".to_string() } else { stem }
}
