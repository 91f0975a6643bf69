//! Shade Core: domain layer for relative color lightening and darkening.
//!
//! This crate contains color parsing, the per-channel adjustment transform,
//! argument validation, and the comparison-strip layout. Rasterisation lives
//! behind the [`render::DrawSurface`] trait and is provided elsewhere.

pub mod adjust;
pub mod color;
pub mod error;
pub mod render;
pub mod request;

// Re-exports for convenience.
pub use adjust::adjuster::{ColorAdjuster, adjust_colours};
pub use adjust::args::{Arg, FactorInput, FlagInput};
pub use adjust::factor::AdjustmentFactor;
pub use adjust::transform::adjust_color;
pub use color::batch::{ColorBatch, ColorInput};
pub use color::model::Color;
pub use color::parse::{ColorParseError, parse_color};
pub use error::{AdjustError, ErrorKind, InvalidColor};
pub use render::{ComparisonStrip, DrawSurface, Rect, StripConfig, TextStyle};
pub use request::{AdjustRequest, AdjustResponse};
