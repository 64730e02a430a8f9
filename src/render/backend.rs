//! Backend-agnostic drawing capability. Dashing and bezier flattening are
//! handled above this seam; backends only see solid primitives.

use kurbo::Point;
use tracing::warn;

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`. Document colors come from user input,
    /// so unparsable values fall back to opaque white instead of failing the
    /// frame.
    pub fn from_hex(hex: &str) -> Self {
        match Self::try_from_hex(hex) {
            Some(c) => c,
            None => {
                warn!(hex, "unparsable color, falling back to white");
                Self::WHITE
            }
        }
    }

    fn try_from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

/// Vertical anchoring of a text draw relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text sits fully above the anchor point.
    Above,
    /// Text is vertically centered on the anchor point.
    Middle,
    /// Text hangs fully below the anchor point.
    Below,
}

/// Minimal vector-drawing capability the field renderer draws through.
///
/// All coordinates are pixel-space. Implementations must not assume any call
/// ordering beyond painter's order (later calls draw over earlier ones).
pub trait DrawSurface {
    /// Fill an axis-aligned rectangle given its top-left corner and size.
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba8);

    /// Stroke an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64, stroke_px: f64, color: Rgba8);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Stroke a circle outline centered at `center`.
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_px: f64, color: Rgba8);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, stroke_px: f64, color: Rgba8);

    /// Stroke an open polyline through `points` in order.
    fn stroke_polyline(&mut self, points: &[Point], stroke_px: f64, color: Rgba8) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], stroke_px, color);
        }
    }

    /// Draw `text` horizontally centered on `pos.x`, vertically placed per
    /// `anchor`. `size_px` is the font pixel size. Backends without text
    /// support may ignore this call.
    fn draw_text(&mut self, text: &str, pos: Point, size_px: f64, anchor: TextAnchor, color: Rgba8);
}
