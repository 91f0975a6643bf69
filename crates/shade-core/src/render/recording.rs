//! Surface that records draw calls instead of rasterising them.

use glam::Vec2;
use palette::Srgba;

use super::{DrawSurface, Rect, TextStyle};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Begin { size: Vec2 },
    FillRect { rect: Rect, fill: Srgba<u8> },
    Text { center: Vec2, label: String, style: TextStyle },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Srgba<u8>)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, fill } => Some((rect, fill)),
            _ => None,
        })
    }

    /// Text labels in draw order.
    pub fn labels(&self) -> impl Iterator<Item = (&Vec2, &str)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { center, label, .. } => Some((center, label.as_str())),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn begin(&mut self, size: Vec2) {
        self.commands.clear();
        self.commands.push(DrawCommand::Begin { size });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Srgba<u8>) {
        self.commands.push(DrawCommand::FillRect { rect, fill });
    }

    fn text(&mut self, center: Vec2, label: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            center,
            label: label.to_owned(),
            style: style.clone(),
        });
    }
}
