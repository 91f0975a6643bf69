//! In-memory raster surface backed by `image::RgbaImage`.

use glam::Vec2;
use image::{Pixel, Rgba, RgbaImage};
use palette::Srgba;
use shade_core::{Color, DrawSurface, Rect, TextStyle};

use crate::glyphs::{GLYPH_ADVANCE_COLS, GLYPH_ROWS, lit_cells};

/// Paints comparison strips into an RGBA8 image.
///
/// Rectangle edges snap to the nearest pixel so adjacent cells tile without
/// gaps. Partially transparent fills are alpha-blended over existing pixels.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::with_background(Color::WHITE)
    }
}

impl RasterSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface cleared to `background` on every `begin`.
    pub fn with_background(background: Color) -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            background: Rgba([background.r, background.g, background.b, 255]),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Blend `px` over the pixels in `[x0, x1) × [y0, y1)`, clipped to the image.
    fn blend_span(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, px: Rgba<u8>) {
        let (w, h) = self.image.dimensions();
        let clip = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
        let (x0, x1) = (clip(x0, w), clip(x1, w));
        let (y0, y1) = (clip(y0, h), clip(y1, h));

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.get_pixel_mut(x, y).blend(&px);
            }
        }
    }
}

fn to_pixel(c: Srgba<u8>) -> Rgba<u8> {
    Rgba([c.red, c.green, c.blue, c.alpha])
}

impl DrawSurface for RasterSurface {
    fn begin(&mut self, size: Vec2) {
        let width = size.x.round().max(0.0) as u32;
        let height = size.y.round().max(0.0) as u32;
        tracing::debug!("raster surface {width}x{height}");
        self.image = RgbaImage::from_pixel(width, height, self.background);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Srgba<u8>) {
        let max = rect.max();
        self.blend_span(rect.min.x, rect.min.y, max.x, max.y, to_pixel(fill));
    }

    fn text(&mut self, center: Vec2, label: &str, style: &TextStyle) {
        // Integer scale keeps glyph cells square and crisp.
        let scale = (style.font_size / GLYPH_ROWS as f32).round().max(1.0);
        let advance = GLYPH_ADVANCE_COLS as f32 * scale;
        let count = label.chars().count() as f32;
        if count == 0.0 {
            return;
        }

        // Drop the trailing spacing column from the measured width.
        let width = count * advance - scale;
        let height = GLYPH_ROWS as f32 * scale;
        let origin = center - Vec2::new(width, height) * 0.5;
        let px = to_pixel(style.color);

        for (i, c) in label.chars().enumerate() {
            let left = origin.x + i as f32 * advance;
            for (col, row) in lit_cells(c) {
                let x = left + col as f32 * scale;
                let y = origin.y + row as f32 * scale;
                self.blend_span(x, y, x + scale, y + scale, px);
            }
        }
    }
}
