//! CPU raster [`DrawSurface`] backed by `image`/`imageproc`. Surfaces built
//! without a font silently skip text draws.

use crate::foundation::error::{PlaychalkError, PlaychalkResult};
use crate::render::backend::{DrawSurface, Rgba8, TextAnchor};
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    Blend, draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use kurbo::{Point, Vec2};

fn pixel(color: Rgba8) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

/// A pixel surface the field renderer can rasterize into.
pub struct RasterSurface {
    canvas: Blend<RgbaImage>,
    font: Option<FontVec>,
}

impl RasterSurface {
    /// Allocate a surface. Zero-sized dimensions are the rendering-context
    /// capability failure and surface exactly once, here.
    pub fn new(width: u32, height: u32) -> PlaychalkResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlaychalkError::render(
                "raster surface requires non-zero dimensions",
            ));
        }
        Ok(Self {
            canvas: Blend(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))),
            font: None,
        })
    }

    /// Attach a TrueType/OpenType font for text layers.
    pub fn with_font_bytes(mut self, bytes: Vec<u8>) -> PlaychalkResult<Self> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| PlaychalkError::render(format!("failed to parse font: {e}")))?;
        self.font = Some(font);
        Ok(self)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn width(&self) -> u32 {
        self.canvas.0.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.0.height()
    }

    /// Unwrap the finished frame for encoding or saving.
    pub fn into_image(self) -> RgbaImage {
        self.canvas.0
    }

    fn thick_segment(&mut self, from: Point, to: Point, stroke_px: f64, color: Rgba8) {
        let px = pixel(color);
        let passes = stroke_px.round().max(1.0) as i32;
        let dir = to - from;
        let normal = if dir.hypot() > 0.0 {
            Vec2::new(-dir.y, dir.x) / dir.hypot()
        } else {
            Vec2::new(0.0, 1.0)
        };
        for i in 0..passes {
            let offset = normal * (f64::from(i) - f64::from(passes - 1) / 2.0);
            let a = from + offset;
            let b = to + offset;
            draw_line_segment_mut(
                &mut self.canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                px,
            );
        }
    }
}

impl DrawSurface for RasterSurface {
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Rgba8) {
        let w = width.round() as i32;
        let h = height.round() as i32;
        if w <= 0 || h <= 0 {
            return;
        }
        let rect = Rect::at(origin.x.round() as i32, origin.y.round() as i32)
            .of_size(w as u32, h as u32);
        draw_filled_rect_mut(&mut self.canvas, rect, pixel(color));
    }

    fn stroke_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        stroke_px: f64,
        color: Rgba8,
    ) {
        let corners = [
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
            origin,
        ];
        self.stroke_polyline(&corners, stroke_px, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        draw_filled_circle_mut(
            &mut self.canvas,
            (center.x.round() as i32, center.y.round() as i32),
            radius.round().max(1.0) as i32,
            pixel(color),
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke_px: f64, color: Rgba8) {
        let c = (center.x.round() as i32, center.y.round() as i32);
        let px = pixel(color);
        let passes = stroke_px.round().max(1.0) as i32;
        let base = radius.round().max(1.0) as i32;
        for i in 0..passes {
            let r = base - (passes - 1) / 2 + i;
            if r > 0 {
                draw_hollow_circle_mut(&mut self.canvas, c, r, px);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke_px: f64, color: Rgba8) {
        self.thick_segment(from, to, stroke_px, color);
    }

    fn draw_text(&mut self, text: &str, pos: Point, size_px: f64, anchor: TextAnchor, color: Rgba8) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let scale = PxScale::from(size_px as f32);
        let (w, h) = text_size(scale, font, text);
        let x = pos.x - f64::from(w) / 2.0;
        let y = match anchor {
            TextAnchor::Above => pos.y - f64::from(h),
            TextAnchor::Middle => pos.y - f64::from(h) / 2.0,
            TextAnchor::Below => pos.y,
        };
        draw_text_mut(
            &mut self.canvas,
            pixel(color),
            x.round() as i32,
            y.round() as i32,
            scale,
            font,
            text,
        );
    }
}
