//! Persistence of finished canvases.

use crate::error::RenderError;
use crate::raster::canvas::SvgCanvas;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use tracing::debug;

// =#========================================================================#=
// IMAGE STORE (trait)
// =#========================================================================T=
/// Writes a finished canvas to `path`.
///
/// The canvas is taken by value, so its buffers are released as soon as the
/// image is flushed. Implementations create missing parent directories.
pub trait ImageStore {
    fn save(&self, canvas: SvgCanvas, path: &Path) -> Result<(), RenderError>;
}

// =#========================================================================#=
// PNG STORE
// =#========================================================================#=
/// Rasterizes canvases with `resvg` and writes them as PNG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngStore {
    /// Whether to load the fonts installed on the system for label text
    system_fonts: bool,
}

impl Default for PngStore {
    fn default() -> Self {
        PngStore { system_fonts: true }
    }
}

impl PngStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips loading system fonts. Labels are then left out of the image,
    /// which is mostly useful for tests.
    pub fn without_system_fonts(mut self) -> Self {
        self.system_fonts = false;
        self
    }

    /// Rasterizes `canvas` into PNG bytes.
    pub fn encode(&self, canvas: &SvgCanvas) -> Result<Vec<u8>, RenderError> {
        let mut options = usvg::Options::default();
        options.font_family = canvas.font_family().to_string();
        if self.system_fonts {
            options.fontdb_mut().load_system_fonts();
        }

        let tree = usvg::Tree::from_str(&canvas.to_svg(), &options)?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
            RenderError::CanvasAllocation {
                width: size.width(),
                height: size.height(),
            },
        )?;

        let mut pixmap_mut = pixmap.as_mut();
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap_mut);

        pixmap
            .encode_png()
            .map_err(|err| RenderError::Encode(err.to_string()))
    }
}

impl ImageStore for PngStore {
    fn save(&self, canvas: SvgCanvas, path: &Path) -> Result<(), RenderError> {
        let png = self.encode(&canvas)?;
        drop(canvas);

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, &png)?;

        debug!(path = %path.display(), bytes = png.len(), "wrote png");
        Ok(())
    }
}
