use crate::foundation::error::{PlaychalkError, PlaychalkResult};

pub use kurbo::Point;

/// Upper bound of the normalized field plane on both axes.
pub const FIELD_EXTENT: f64 = 100.0;

/// A position on the normalized 100x100 field plane.
///
/// `(0,0)` is the top-left corner of the field picture, `x` runs along the
/// length of the field (end zone to end zone), `y` across it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldPosition {
    pub x: f64,
    pub y: f64,
}

impl FieldPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, FIELD_EXTENT),
            y: self.y.clamp(0.0, FIELD_EXTENT),
        }
    }

    /// Linear interpolation between `a` and `b` at parameter `t`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
        }
    }
}

/// Canvas dimensions in pixels.
///
/// The canvas is aspect-ratio locked to 16:9; widths come from the hosting
/// container and heights are derived. A dimension change invalidates every
/// rendered layer, so holders re-render on resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Fallback size used until the host container reports a measurement.
    pub const DEFAULT: Self = Self {
        width: 800.0,
        height: 450.0,
    };

    /// Create a validated size. Non-finite or non-positive dimensions are the
    /// one capability failure this module can surface.
    pub fn new(width: f64, height: f64) -> PlaychalkResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(PlaychalkError::validation(
                "canvas dimensions must be finite and positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Derive a 16:9 canvas from a measured container width.
    pub fn from_container_width(width: f64) -> PlaychalkResult<Self> {
        Self::new(width, width * 9.0 / 16.0)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Convert a normalized field position to pixel space.
pub fn to_pixel(pos: FieldPosition, size: CanvasSize) -> Point {
    Point::new(
        pos.x / FIELD_EXTENT * size.width,
        pos.y / FIELD_EXTENT * size.height,
    )
}

/// Convert a pixel-space point back to the normalized plane.
///
/// Pointer events can land outside the canvas; the result is clamped into
/// `[0,100]^2` rather than rejected.
pub fn to_normalized(point: Point, size: CanvasSize) -> FieldPosition {
    FieldPosition {
        x: point.x / size.width * FIELD_EXTENT,
        y: point.y / size.height * FIELD_EXTENT,
    }
    .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_round_trip_is_exact_within_tolerance() {
        let size = CanvasSize::new(1024.0, 576.0).unwrap();
        for &(x, y) in &[(0.0, 0.0), (50.0, 50.0), (12.5, 87.5), (100.0, 100.0)] {
            let p = FieldPosition::new(x, y);
            let back = to_normalized(to_pixel(p, size), size);
            assert!((back.x - p.x).abs() < 1e-9, "x mismatch at {x},{y}");
            assert!((back.y - p.y).abs() < 1e-9, "y mismatch at {x},{y}");
        }
    }

    #[test]
    fn to_normalized_clamps_out_of_bounds_pointers() {
        let size = CanvasSize::DEFAULT;
        let p = to_normalized(Point::new(-40.0, 9999.0), size);
        assert_eq!(p, FieldPosition::new(0.0, 100.0));
    }

    #[test]
    fn container_width_locks_16_9() {
        let size = CanvasSize::from_container_width(1600.0).unwrap();
        assert_eq!(size.height, 900.0);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert!(CanvasSize::new(0.0, 450.0).is_err());
        assert!(CanvasSize::new(800.0, -1.0).is_err());
        assert!(CanvasSize::new(f64::NAN, 450.0).is_err());
    }
}
