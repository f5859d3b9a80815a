//! Text diagram writing for lineage trees.

use crate::config::TextConfig;
use crate::model::{LineageNodeData, LineageTree, Node, NodeIndex};
use crate::text::defs::{
    BRANCH_GLYPH, CORNER_GLYPH, DEFAULT_DATE_FORMAT, EXTANT_GLYPH, EXTINCT_GLYPH,
    TRUNCATION_MARKER, VERTICAL_GLYPH,
};
use chrono::DateTime;
use tracing::debug;

/// Formats a creation timestamp (Unix seconds) for the date column.
pub type TimestampFormatter = Box<dyn Fn(i64) -> String>;

/// Formats `timestamp` as a short UTC date, e.g. `3/14/2021`.
///
/// Timestamps outside the representable range are printed as plain integers.
pub fn format_short_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format(DEFAULT_DATE_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

/// Open sibling group: a branch connector was drawn at `column` for a child
/// at `depth` whose later siblings have not been written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SiblingMarker {
    depth: usize,
    column: usize,
}

// =#========================================================================#=
// TEXT RENDERER
// =#========================================================================#=
/// Renders a [LineageTree] as a monospace diagram, one line per species.
///
/// Each line consists of the creation date (padded to the widest date in the
/// tree), a status glyph (`*` extinct, `-` living), the connector prefix and
/// the short display name:
///
/// ```text
/// 1/1/2020  - Root
/// 1/2/2020  * ├─Left
/// 12/3/2020 - │ └─Left child
/// 1/4/2020  - └─Right
/// ```
///
/// # Example
/// ```
/// use lineage_render::model::{LineageNodeData, LineageTree, Species, SpeciesId};
/// use lineage_render::text::TextRenderer;
///
/// let root = Species::new(SpeciesId(1), "Root", 0);
/// let mut tree = LineageTree::with_root(LineageNodeData::ancestor(root));
/// tree.add_child(0, LineageNodeData::descendant(Species::new(SpeciesId(2), "Child", 0)));
///
/// let text = TextRenderer::new()
///     .with_timestamp_formatter(|_| "t".to_string())
///     .render(Some(&tree));
/// assert_eq!(text, "t - Root\nt - └─Child");
/// ```
pub struct TextRenderer {
    /// Output budget in characters
    max_length: usize,
    /// Whether to draw connector glyphs
    draw_lines: bool,
    /// Custom date column formatter; [format_short_date] if unset
    formatter: Option<TimestampFormatter>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Creates a renderer with [TextConfig] defaults.
    pub fn new() -> Self {
        let config = TextConfig::default();
        TextRenderer {
            max_length: config.max_length,
            draw_lines: config.draw_lines,
            formatter: None,
        }
    }

    /// Takes over budget and connector setting from `config`.
    pub fn with_config(mut self, config: &TextConfig) -> Self {
        self.max_length = config.max_length;
        self.draw_lines = config.draw_lines;
        self
    }

    /// Sets the output budget in characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Enables or disables connector glyphs.
    pub fn with_lines(mut self, draw_lines: bool) -> Self {
        self.draw_lines = draw_lines;
        self
    }

    /// Replaces the default short-date formatter of the date column.
    pub fn with_timestamp_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(i64) -> String + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Renders `tree` as a multi-line string without trailing newline.
    ///
    /// Returns an empty string if there is no tree. If the next line would
    /// exceed the budget, `...` is appended on its own line and the remaining
    /// lines are dropped, so the result has at most `max_length + 4`
    /// characters.
    pub fn render(&self, tree: Option<&LineageTree>) -> String {
        let Some(tree) = tree else {
            return String::new();
        };

        // Pass 1: date column
        let mut timestamps = vec![String::new(); tree.len()];
        let mut column_width = 0;
        for node in tree.pre_order_iter() {
            let formatted = self.format_timestamp(node.data().species.creation_timestamp());
            column_width = column_width.max(formatted.chars().count());
            timestamps[node.index()] = formatted;
        }

        // Pass 2: lines, assembled under the budget
        let mut markers = Vec::new();
        let mut output = String::new();
        let mut written = 0;
        let mut num_lines = 0;
        let mut truncated = false;
        for node in tree.pre_order_iter() {
            let line = self.format_line(tree, node, &timestamps[node.index()], column_width, &mut markers);
            let separator = usize::from(num_lines > 0);
            let line_len = line.chars().count();

            if written + separator + line_len > self.max_length {
                if num_lines > 0 {
                    output.push('\n');
                }
                output.push_str(TRUNCATION_MARKER);
                truncated = true;
                break;
            }

            if num_lines > 0 {
                output.push('\n');
            }
            output.push_str(&line);
            written += separator + line_len;
            num_lines += 1;
        }

        debug!(
            nodes = tree.len(),
            lines = num_lines,
            truncated,
            "rendered lineage text"
        );
        output
    }

    fn format_timestamp(&self, timestamp: i64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(timestamp),
            None => format_short_date(timestamp),
        }
    }

    /// Builds the line of `node`, updating the open sibling groups.
    fn format_line(
        &self,
        tree: &LineageTree,
        node: &Node<LineageNodeData>,
        timestamp: &str,
        column_width: usize,
        markers: &mut Vec<SiblingMarker>,
    ) -> String {
        let species = &node.data().species;
        let mut line = String::with_capacity(column_width + species.short_display_name().len() + 16);

        line.push_str(timestamp);
        line.extend(std::iter::repeat_n(' ', column_width - timestamp.chars().count()));
        line.push(' ');
        line.push(if species.is_extinct() { EXTINCT_GLYPH } else { EXTANT_GLYPH });

        if self.draw_lines && node.has_parent() {
            push_connector(tree, node.index(), markers, &mut line);
        } else {
            line.push(' ');
        }

        line.push_str(species.short_display_name());
        line
    }
}

/// Appends indentation with continuation bars and the connector of `index`.
///
/// A child with later siblings opens its group by pushing a marker at the
/// column of its branch glyph; every deeper line draws a bar in that column
/// until the last sibling closes the group with a corner glyph.
fn push_connector(
    tree: &LineageTree,
    index: NodeIndex,
    markers: &mut Vec<SiblingMarker>,
    line: &mut String,
) {
    let depth = tree.depth(index);
    let column = depth * 2 - 1;

    for i in 0..column {
        if markers.iter().any(|m| m.column == i) {
            line.push(VERTICAL_GLYPH);
        } else {
            line.push(' ');
        }
    }

    // Deeper groups are all closed before a sibling at `depth` is reached,
    // so an open group at `depth` can only be on top of the stack.
    let group_open = markers.last().is_some_and(|m| m.depth == depth);
    if tree.has_next_sibling(index) {
        line.push_str(BRANCH_GLYPH);
        if !group_open {
            markers.push(SiblingMarker { depth, column });
        }
    } else {
        line.push_str(CORNER_GLYPH);
        if group_open {
            markers.pop();
        }
    }
}
