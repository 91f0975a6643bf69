//! Comparison strip configuration.

use serde::{Deserialize, Serialize};

/// Default width of one color cell.
const DEFAULT_CELL_WIDTH: u32 = 64;
/// Default height of each row.
const DEFAULT_ROW_HEIGHT: u32 = 96;
/// Default opacity of the label backdrop and text.
const DEFAULT_LABEL_ALPHA: f32 = 0.5;
/// Default label glyph height.
const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Geometry and labelling of the before/after strip.
///
/// Every field is optional when deserializing; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Width of each color cell in surface units.
    pub cell_width: u32,
    /// Height of each of the two rows in surface units.
    pub row_height: u32,
    /// Opacity of the label overlay in `0.0..=1.0`.
    pub label_alpha: f32,
    /// Label glyph height in surface units.
    pub label_font_size: f32,
    /// Label over the original colors.
    pub old_label: String,
    /// Label over the adjusted colors.
    pub new_label: String,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            label_alpha: DEFAULT_LABEL_ALPHA,
            label_font_size: DEFAULT_FONT_SIZE,
            old_label: "old".to_owned(),
            new_label: "new".to_owned(),
        }
    }
}

impl StripConfig {
    /// Parse a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Label opacity as an 8-bit alpha.
    pub fn label_alpha_u8(&self) -> u8 {
        (self.label_alpha.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
    }
}
