//! Before/after comparison strip and the drawing surface it targets.

pub mod config;
pub mod recording;
pub mod strip;

use glam::Vec2;
use palette::Srgba;

pub use config::StripConfig;
pub use recording::{DrawCommand, RecordingSurface};
pub use strip::ComparisonStrip;

/// Horizontal advance of one glyph relative to the font size.
pub const GLYPH_ADVANCE: f32 = 6.0 / 7.0;

// ── Geometry ─────────────────────────────────────────────────────

/// Axis-aligned rectangle in surface units, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

// ── Text ─────────────────────────────────────────────────────────

/// Styling for a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Glyph height in surface units.
    pub font_size: f32,
    pub color: Srgba<u8>,
}

impl TextStyle {
    /// Approximate rendered width of `label`.
    pub fn text_width(&self, label: &str) -> f32 {
        label.chars().count() as f32 * self.font_size * GLYPH_ADVANCE
    }
}

// ── Surface trait ────────────────────────────────────────────────

/// A 2D drawing target able to fill rectangles and place text.
///
/// Fill colors carry straight (non-premultiplied) alpha; surfaces blend
/// partially transparent fills over what is already drawn.
pub trait DrawSurface {
    /// Start a new drawing of `size` surface units, discarding prior content.
    fn begin(&mut self, size: Vec2);

    /// Fill `rect` with `fill`.
    fn fill_rect(&mut self, rect: Rect, fill: Srgba<u8>);

    /// Draw `label` centered on `center`.
    fn text(&mut self, center: Vec2, label: &str, style: &TextStyle);
}
