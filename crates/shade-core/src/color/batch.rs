//! Ordered batches of colors built from caller input.

use serde::{Deserialize, Serialize};

use crate::color::model::Color;
use crate::color::parse::parse_color;
use crate::error::{AdjustError, InvalidColor};

/// One caller-supplied color specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Named, hex, or `rgb()` text.
    Spec(String),
    /// Numeric `[r, g, b]` triple.
    Rgb([u8; 3]),
    /// Missing/unknown marker. Always rejected.
    Na,
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Spec(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Spec(s)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(rgb: [u8; 3]) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        Self::Rgb(c.channels())
    }
}

/// Non-empty, order-preserving sequence of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorBatch(Vec<Color>);

impl ColorBatch {
    /// Wrap parsed colors. Fails on an empty vector.
    pub fn new(colors: Vec<Color>) -> Result<Self, AdjustError> {
        if colors.is_empty() {
            return Err(AdjustError::EmptyColors);
        }
        Ok(Self(colors))
    }

    /// Parse every input into a batch.
    ///
    /// The missing-value marker is checked before any parsing. Parse failures
    /// are collected so the error names every offending input, not just the
    /// first.
    pub fn from_inputs(inputs: &[ColorInput]) -> Result<Self, AdjustError> {
        if inputs.iter().any(|c| matches!(c, ColorInput::Na)) {
            return Err(AdjustError::ColorNa);
        }
        if inputs.is_empty() {
            return Err(AdjustError::EmptyColors);
        }

        let mut colors = Vec::with_capacity(inputs.len());
        let mut invalid = Vec::new();

        for (index, input) in inputs.iter().enumerate() {
            match input {
                ColorInput::Rgb(rgb) => colors.push(Color::from(*rgb)),
                ColorInput::Spec(spec) => match parse_color(spec) {
                    Ok(c) => colors.push(c),
                    Err(reason) => invalid.push(InvalidColor {
                        index,
                        input: spec.clone(),
                        reason,
                    }),
                },
                ColorInput::Na => return Err(AdjustError::ColorNa),
            }
        }

        if !invalid.is_empty() {
            return Err(AdjustError::InvalidColors(invalid));
        }
        Ok(Self(colors))
    }

    /// Apply `f` to every color, keeping order and length.
    pub fn map(&self, f: impl FnMut(Color) -> Color) -> Self {
        Self(self.0.iter().copied().map(f).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed batch.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Each color as uppercase `#RRGGBB`, in order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_hex()).collect()
    }
}

impl TryFrom<Vec<Color>> for ColorBatch {
    type Error = AdjustError;
    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<ColorBatch> for Vec<Color> {
    fn from(batch: ColorBatch) -> Self {
        batch.0
    }
}

impl<'a> IntoIterator for &'a ColorBatch {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
