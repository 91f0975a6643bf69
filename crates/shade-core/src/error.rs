//! Error taxonomy for color adjustment calls.

use std::fmt;

use crate::color::parse::ColorParseError;

/// Broad classification of an [`AdjustError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call itself was malformed (required argument omitted, bad request).
    Usage,
    /// An argument was present but its value failed validation.
    Validation,
}

/// A single color specification that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor {
    /// Position of the offending element in the input batch.
    pub index: usize,
    /// The input as supplied by the caller.
    pub input: String,
    /// Why it was rejected.
    pub reason: ColorParseError,
}

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at position {} ({})", self.input, self.index, self.reason)
    }
}

/// Errors raised by an adjustment call. All are fatal; no partial results.
#[derive(Debug, thiserror::Error)]
pub enum AdjustError {
    #[error("argument \"{0}\" is missing, with no default")]
    MissingArgument(&'static str),

    #[error("malformed adjustment request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("one or more colors is NA")]
    ColorNa,

    #[error("cols must contain at least one color")]
    EmptyColors,

    #[error("invalid color specification: {}", join_invalid(.0))]
    InvalidColors(Vec<InvalidColor>),

    #[error("{0} is NA")]
    ArgumentNa(&'static str),

    #[error("{name} must be {expected}, got {value:?}")]
    Coercion {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("adj must be between -1 and 1")]
    FactorOutOfRange(f64),
}

impl AdjustError {
    /// Whether this is a usage error or a validation error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) | Self::Request(_) => ErrorKind::Usage,
            _ => ErrorKind::Validation,
        }
    }
}

fn join_invalid(invalid: &[InvalidColor]) -> String {
    invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
