//! Drawing surface for raster output.
//!
//! - [Canvas]: the drawing operations the raster renderer relies on
//! - [SvgCanvas]: records drawing operations as an SVG document, which
//!   [PngStore](crate::raster::PngStore) rasterizes

use crate::config::Color;
use crate::layout::RenderBounds;
use std::fmt::Write;

/// Point on a canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

// =#========================================================================#=
// CANVAS (trait)
// =#========================================================================T=
/// Drawing operations needed to paint a laid out lineage tree.
pub trait Canvas {
    /// Discards everything drawn so far and fills the canvas with `color`.
    fn clear(&mut self, color: Color);

    /// Draws a straight line.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Draws a line ending in an arrow head at `to`.
    fn draw_arrow(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Draws `text` centered in `bounds`.
    fn draw_text(&mut self, text: &str, bounds: &RenderBounds, color: Color);
}

// =#========================================================================#=
// SVG CANVAS
// =#========================================================================#=
/// [Canvas] recording its drawing as SVG elements.
///
/// # Example
/// ```
/// use lineage_render::config::Color;
/// use lineage_render::raster::{Canvas, Point, SvgCanvas};
///
/// let mut canvas = SvgCanvas::new(40, 20, "DejaVu Sans", 12.0);
/// canvas.clear(Color::rgb(0, 0, 0));
/// canvas.draw_line(Point::new(0.0, 10.0), Point::new(40.0, 10.0), Color::rgb(255, 0, 0), 1.0);
///
/// let svg = canvas.to_svg();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<line"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    font_family: String,
    font_size: f64,
    /// Serialized elements, in drawing order
    body: String,
}

/// Length of an arrow head in multiples of the stroke width, plus a minimum
const ARROW_HEAD_SCALE: f64 = 3.0;
const ARROW_HEAD_MIN: f64 = 6.0;

impl SvgCanvas {
    /// Creates an empty, transparent canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32, font_family: impl Into<String>, font_size: f64) -> Self {
        SvgCanvas {
            width,
            height,
            font_family: font_family.into(),
            font_size,
            body: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the complete SVG document.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, color: Color) {
        self.body.clear();
        // Writing into a String cannot fail
        let _ = write!(
            self.body,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" {}/>",
            self.width,
            self.height,
            fill(color)
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        let _ = write!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke(color, width)
        );
    }

    fn draw_arrow(&mut self, from: Point, to: Point, color: Color, width: f64) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let length = dx.hypot(dy);
        if length <= f64::EPSILON {
            return;
        }

        let head = (ARROW_HEAD_SCALE * width).max(ARROW_HEAD_MIN).min(length);
        let (ux, uy) = (dx / length, dy / length);
        // Shaft ends where the head starts, so the tip stays sharp
        let base = Point::new(to.x - ux * head, to.y - uy * head);
        self.draw_line(from, base, color, width);

        let half = head / 2.0;
        let left = Point::new(base.x - uy * half, base.y + ux * half);
        let right = Point::new(base.x + uy * half, base.y - ux * half);
        let _ = write!(
            self.body,
            "<polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" {}/>",
            to.x,
            to.y,
            left.x,
            left.y,
            right.x,
            right.y,
            fill(color)
        );
    }

    fn draw_text(&mut self, text: &str, bounds: &RenderBounds, color: Color) {
        let _ = write!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" {}>{}</text>",
            bounds.center_x(),
            bounds.center_y(),
            escape_xml(&self.font_family),
            self.font_size,
            fill(color),
            escape_xml(text)
        );
    }
}

fn fill(color: Color) -> String {
    format!(
        "fill=\"#{:02x}{:02x}{:02x}\" fill-opacity=\"{:.3}\"",
        color.r,
        color.g,
        color.b,
        color.opacity()
    )
}

fn stroke(color: Color, width: f64) -> String {
    format!(
        "stroke=\"#{:02x}{:02x}{:02x}\" stroke-opacity=\"{:.3}\" stroke-width=\"{width}\" stroke-linecap=\"round\"",
        color.r,
        color.g,
        color.b,
        color.opacity()
    )
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
