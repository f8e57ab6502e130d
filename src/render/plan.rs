use crate::foundation::core::{Line, PageSize, Point, Rect, Rgb};
use crate::render::metrics::text_advance;

/// Stroke style for lines and rectangle outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgb,
    /// Line width in points.
    pub width: f64,
}

/// A single drawing primitive on the page.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Black text with its baseline starting at `origin`.
    Text {
        /// Baseline start.
        origin: Point,
        /// Font size in points.
        size: f64,
        /// Text to draw.
        text: String,
    },
    /// A straight line.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke style.
        stroke: Stroke,
    },
    /// An axis-aligned rectangle, filled, outlined, or both.
    Rect {
        /// Rectangle bounds.
        rect: Rect,
        /// Fill color, if any.
        fill: Option<Rgb>,
        /// Outline style, if any.
        stroke: Option<Stroke>,
    },
}

/// Backend-agnostic drawing plan for a single page.
///
/// A plan is built by exactly one assembly call and handed to a backend once complete. Ops are
/// painted in order, so later ops draw over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
    /// Page dimensions.
    pub page: PageSize,
    /// Ordered draw operations.
    pub ops: Vec<DrawOp>,
}

impl DrawPlan {
    /// Start an empty plan for a page.
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            ops: Vec::new(),
        }
    }

    /// Draw text with its baseline starting at `origin`.
    pub fn text(&mut self, origin: Point, size: f64, text: impl Into<String>) {
        self.ops.push(DrawOp::Text {
            origin,
            size,
            text: text.into(),
        });
    }

    /// Draw text horizontally centred on `center_x`.
    pub fn text_centered(&mut self, center_x: f64, y: f64, size: f64, text: impl Into<String>) {
        let text = text.into();
        let x = center_x - text_advance(&text, size) / 2.0;
        self.text(Point::new(x, y), size, text);
    }

    /// Draw text whose advance ends at `right_x`.
    pub fn text_right(&mut self, right_x: f64, y: f64, size: f64, text: impl Into<String>) {
        let text = text.into();
        let x = right_x - text_advance(&text, size);
        self.text(Point::new(x, y), size, text);
    }

    pub fn line(&mut self, line: Line, stroke: Stroke) {
        self.ops.push(DrawOp::Line { line, stroke });
    }

    pub fn rect(&mut self, rect: Rect, fill: Option<Rgb>, stroke: Option<Stroke>) {
        self.ops.push(DrawOp::Rect { rect, fill, stroke });
    }

    /// Iterate over `(origin, text)` for every text op in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { origin, text, .. } => Some((*origin, text.as_str())),
            _ => None,
        })
    }

    /// Origin of the first text op whose content equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<Point> {
        self.texts().find(|(_, t)| *t == needle).map(|(p, _)| p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
