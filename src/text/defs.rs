//! Glyphs used by the text renderer.

/// Connector for a child followed by more siblings
pub(crate) const BRANCH_GLYPH: &str = "├─";

/// Connector for the last child of its parent
pub(crate) const CORNER_GLYPH: &str = "└─";

/// Continuation bar drawn below an open branch connector
pub(crate) const VERTICAL_GLYPH: char = '│';

/// Status glyph of an extinct species
pub(crate) const EXTINCT_GLYPH: char = '*';

/// Status glyph of a living species
pub(crate) const EXTANT_GLYPH: char = '-';

/// Appended when the output budget is exhausted
pub(crate) const TRUNCATION_MARKER: &str = "...";

/// Default `chrono` format of creation timestamps (short date)
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
