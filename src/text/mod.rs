//! Text diagrams of lineage trees for chat-style output.
//!
//! # Quick API
//! * [`render_text`] - renders a tree with explicit budget, connector and
//!   date settings
//!
//! # Full API
//! Configure a [`TextRenderer`] with `with_*` methods or from a
//! [TextConfig](crate::config::TextConfig), and call
//! [`TextRenderer::render`].
//!
//! # Format
//! One line per species, in pre-order:
//! * `date` padded to the widest date of the tree, then a space
//! * status glyph: `*` extinct, `-` living
//! * connector prefix (if enabled and not the root): `depth × 2 − 1`
//!   columns of indentation, holding `│` below every open branch, followed
//!   by `├─` (more siblings follow) or `└─` (last child)
//! * a single space instead of the prefix for the root, or if connectors
//!   are disabled
//! * short display name

mod defs;
pub mod writer;

pub use self::writer::{TextRenderer, TimestampFormatter, format_short_date};

use crate::model::LineageTree;

/// Renders `tree` as a text diagram of at most `max_length + 4` characters.
///
/// An absent tree renders as the empty string. Without `formatter`, dates
/// are written with [`format_short_date`].
///
/// # Example
/// ```
/// use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
/// use lineage_render::text::render_text;
///
/// let species = Species::new(SpeciesId(1), "Solo", 0).with_extinct(true);
/// let tree = LineageTree::with_root(LineageNodeData::ancestor(species));
///
/// assert_eq!(render_text(Some(&tree), 2000, true, None), "1/1/1970 * Solo");
/// assert_eq!(render_text(None, 2000, true, None), "");
/// ```
pub fn render_text(
    tree: Option<&LineageTree>,
    max_length: usize,
    draw_lines: bool,
    formatter: Option<TimestampFormatter>,
) -> String {
    let mut renderer = TextRenderer::new()
        .with_max_length(max_length)
        .with_lines(draw_lines);
    if let Some(formatter) = formatter {
        renderer = renderer.with_timestamp_formatter(formatter);
    }
    renderer.render(tree)
}
