//! Font metrics used to size labels before layout.

use crate::config::RasterConfig;
use crate::layout::{LabelSize, TextMeasure};

/// Average advance of a glyph, in multiples of the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Line height, in multiples of the font size
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Approximate metrics of a proportional font at a given size.
///
/// Labels are sized from their character count, which keeps layout
/// independent of the fonts installed on the machine drawing the image.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    font_family: String,
    font_size: f64,
}

impl FontMetrics {
    pub fn new(font_family: impl Into<String>, font_size: f64) -> Self {
        FontMetrics {
            font_family: font_family.into(),
            font_size,
        }
    }

    pub fn from_config(config: &RasterConfig) -> Self {
        Self::new(config.font_family.clone(), config.font_size)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

impl TextMeasure for FontMetrics {
    fn measure(&self, label: &str) -> LabelSize {
        let chars = label.chars().count() as f64;
        LabelSize::new(
            chars * self.font_size * CHAR_WIDTH_RATIO,
            self.font_size * LINE_HEIGHT_RATIO,
        )
    }
}
