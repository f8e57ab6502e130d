pub use kurbo::{Line, Point, Rect};

/// Points per millimetre (PDF user space is 1/72 inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub const fn mm(v: f64) -> f64 {
    v * PT_PER_MM
}

/// Physical page size in points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSize {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl PageSize {
    /// ISO A4 portrait, 210 x 297 mm.
    pub const A4: Self = Self {
        width: mm(210.0),
        height: mm(297.0),
    };

    /// Full page rectangle with the origin at the bottom-left corner.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Straight (non-premultiplied) RGB color. Channels are expected in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
