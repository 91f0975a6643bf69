//! Loosely typed call arguments and their coercion.
//!
//! [`Arg`] separates the explicit "no value" sentinel, which short-circuits a
//! call, from the missing/unknown marker, which is always an error.

use crate::error::AdjustError;

/// An optional-style argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    Value(T),
    /// Explicit "no value". The call returns `None` without error.
    Null,
    /// Missing/unknown marker. The call fails.
    Na,
}

impl<T> Arg<T> {
    /// `Ok(Some(v))` for a value, `Ok(None)` for the null sentinel, and the
    /// error built by `on_na` for the missing marker.
    pub fn resolve(self, on_na: impl FnOnce() -> AdjustError) -> Result<Option<T>, AdjustError> {
        match self {
            Self::Value(v) => Ok(Some(v)),
            Self::Null => Ok(None),
            Self::Na => Err(on_na()),
        }
    }
}

impl<T> From<T> for Arg<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Adjustment factor as supplied by the caller, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorInput {
    Number(f64),
    Text(String),
}

impl From<f64> for FactorInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FactorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FactorInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Arg<FactorInput> {
    fn from(n: f64) -> Self {
        Self::Value(FactorInput::Number(n))
    }
}

impl From<&str> for Arg<FactorInput> {
    fn from(s: &str) -> Self {
        Self::Value(FactorInput::from(s))
    }
}

/// Plot flag as supplied by the caller, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagInput {
    Bool(bool),
    /// Non-zero is true.
    Number(f64),
    Text(String),
}

impl FlagInput {
    pub fn coerce(&self) -> Result<bool, AdjustError> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(n) if n.is_nan() => Err(AdjustError::ArgumentNa("plot")),
            Self::Number(n) => Ok(*n != 0.0),
            Self::Text(text) => match text.trim() {
                "TRUE" | "true" | "True" | "T" => Ok(true),
                "FALSE" | "false" | "False" | "F" => Ok(false),
                _ => Err(AdjustError::Coercion {
                    name: "plot",
                    expected: "logical",
                    value: text.clone(),
                }),
            },
        }
    }
}

impl From<bool> for FlagInput {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FlagInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<bool> for Arg<FlagInput> {
    fn from(b: bool) -> Self {
        Self::Value(FlagInput::Bool(b))
    }
}

impl From<&str> for Arg<FlagInput> {
    fn from(s: &str) -> Self {
        Self::Value(FlagInput::from(s))
    }
}
