//! SVG document surface.

use glam::Vec2;
use palette::Srgba;
use shade_core::{Color, DrawSurface, Rect, TextStyle};

/// Collects draw calls into an SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    size: Vec2,
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The complete SVG document for everything drawn since `begin`.
    pub fn finish(&self) -> String {
        let (w, h) = (self.size.x, self.size.y);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body
        )
    }
}

/// `fill` and, when not opaque, `fill-opacity` attributes.
fn fill_attrs(fill: Srgba<u8>) -> String {
    let hex = Color::from(fill.color).to_hex();
    if fill.alpha == 255 {
        format!("fill=\"{hex}\"")
    } else {
        let opacity = fill.alpha as f32 / 255.0;
        format!("fill=\"{hex}\" fill-opacity=\"{opacity:.3}\"")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl DrawSurface for SvgSurface {
    fn begin(&mut self, size: Vec2) {
        self.size = size;
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, fill: Srgba<u8>) {
        self.body.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            rect.min.x,
            rect.min.y,
            rect.size.x,
            rect.size.y,
            fill_attrs(fill)
        ));
    }

    fn text(&mut self, center: Vec2, label: &str, style: &TextStyle) {
        self.body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"monospace\" \
             text-anchor=\"middle\" dominant-baseline=\"central\" {}>{}</text>\n",
            center.x,
            center.y,
            style.font_size,
            fill_attrs(style.color),
            escape(label)
        ));
    }
}
