//! Label measurement seam between layout and the font backend.

/// Extent of a rendered label, in the units of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelSize {
    pub width: f64,
    pub height: f64,
}

impl LabelSize {
    pub fn new(width: f64, height: f64) -> Self {
        LabelSize { width, height }
    }
}

// =#========================================================================#=
// TEXT MEASURE (trait)
// =#========================================================================T=
/// Measures labels for the current font.
///
/// Implementations must return positive, finite dimensions for every label;
/// the layout engine does not repair degenerate sizes.
///
/// Closures `Fn(&str) -> LabelSize` implement this trait, which is handy for
/// fixed-size layouts:
/// ```
/// use lineage_render::layout::{LabelSize, TextMeasure};
///
/// let fixed = |_: &str| LabelSize::new(10.0, 4.0);
/// assert_eq!(fixed.measure("anything").width, 10.0);
/// ```
pub trait TextMeasure {
    fn measure(&self, label: &str) -> LabelSize;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> LabelSize,
{
    fn measure(&self, label: &str) -> LabelSize {
        self(label)
    }
}
