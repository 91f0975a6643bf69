//! Two-row before/after comparison strip.

use glam::Vec2;
use palette::Srgba;

use super::{DrawSurface, Rect, StripConfig, TextStyle};
use crate::color::batch::ColorBatch;
use crate::color::model::Color;

/// Original and adjusted colors, paired by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonStrip {
    pairs: Vec<(Color, Color)>,
}

impl ComparisonStrip {
    /// Pair `old[i]` with `new[i]`. Both batches must have the same length.
    pub fn new(old: &ColorBatch, new: &ColorBatch) -> Self {
        debug_assert_eq!(old.len(), new.len());
        let pairs = old.iter().copied().zip(new.iter().copied()).collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Canvas size for `config`: one cell per color, two rows.
    pub fn canvas_size(&self, config: &StripConfig) -> Vec2 {
        let cell = cell_size(config);
        Vec2::new(cell.x * self.pairs.len() as f32, cell.y * 2.0)
    }

    /// Draw both rows, then the "old"/"new" labels over them.
    ///
    /// ```text
    /// ┌────┬────┬────┐
    /// │ c0 │ c1 │ c2 │  <- original ("old")
    /// ├────┼────┼────┤
    /// │ c0'│ c1'│ c2'│  <- adjusted ("new")
    /// └────┴────┴────┘
    /// ```
    pub fn draw(&self, surface: &mut dyn DrawSurface, config: &StripConfig) {
        let cell = cell_size(config);
        let size = self.canvas_size(config);
        surface.begin(size);

        for (i, (old, new)) in self.pairs.iter().enumerate() {
            let x = i as f32 * cell.x;
            surface.fill_rect(Rect::new(Vec2::new(x, 0.0), cell), opaque(*old));
            surface.fill_rect(Rect::new(Vec2::new(x, cell.y), cell), opaque(*new));
        }

        let alpha = config.label_alpha_u8();
        let style = TextStyle {
            font_size: config.label_font_size,
            color: Srgba::new(255, 255, 255, alpha),
        };
        let rows = [(0.5, &config.old_label), (1.5, &config.new_label)];
        for (row, label) in rows {
            let center = Vec2::new(size.x * 0.5, cell.y * row);
            let backdrop = Vec2::new(
                style.text_width(label) + style.font_size,
                style.font_size * 1.5,
            );
            surface.fill_rect(Rect::centered(center, backdrop), Srgba::new(0, 0, 0, alpha));
            surface.text(center, label, &style);
        }
    }
}

fn cell_size(config: &StripConfig) -> Vec2 {
    Vec2::new(config.cell_width.max(1) as f32, config.row_height.max(1) as f32)
}

fn opaque(c: Color) -> Srgba<u8> {
    Srgba::new(c.r, c.g, c.b, 255)
}
