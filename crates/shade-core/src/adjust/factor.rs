//! Validated adjustment factor.

use std::fmt;

use crate::adjust::args::FactorInput;
use crate::error::AdjustError;

/// Relative lightness change in `[-1, 1]`.
///
/// Positive values move channels toward white, negative values toward
/// black, zero is the identity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AdjustmentFactor(f32);

impl AdjustmentFactor {
    pub const IDENTITY: Self = Self(0.0);
    pub const WHITE: Self = Self(1.0);
    pub const BLACK: Self = Self(-1.0);

    /// Range-checked constructor. Both bounds are inclusive.
    pub fn new(value: f64) -> Result<Self, AdjustError> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(AdjustError::FactorOutOfRange(value));
        }
        Ok(Self(value as f32))
    }

    /// Coerce loosely typed input, then range-check.
    ///
    /// NaN (given directly or parsed from text) counts as the missing marker.
    pub fn coerce(input: &FactorInput) -> Result<Self, AdjustError> {
        let value = match input {
            FactorInput::Number(n) => *n,
            FactorInput::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| AdjustError::Coercion {
                        name: "adj",
                        expected: "numeric",
                        value: text.clone(),
                    })?
            }
        };

        if value.is_nan() {
            return Err(AdjustError::ArgumentNa("adj"));
        }
        Self::new(value)
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for AdjustmentFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl TryFrom<f64> for AdjustmentFactor {
    type Error = AdjustError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
