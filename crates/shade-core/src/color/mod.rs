//! Color model, text parsing, and ordered batches.

pub mod batch;
pub mod model;
pub mod parse;
