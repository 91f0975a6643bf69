//! Relative lightening/darkening of color batches.

pub mod adjuster;
pub mod args;
pub mod factor;
pub mod transform;
