//! Batch adjustment with optional before/after rendering.

use tracing::{debug, info, trace, warn};

use crate::adjust::args::{Arg, FactorInput, FlagInput};
use crate::adjust::factor::AdjustmentFactor;
use crate::adjust::transform::adjust_color;
use crate::color::batch::{ColorBatch, ColorInput};
use crate::error::AdjustError;
use crate::render::{ComparisonStrip, DrawSurface, StripConfig};

/// Adjusts color batches and, on request, draws a comparison strip.
///
/// The adjuster holds no state between calls besides the attached surface
/// and strip configuration.
#[derive(Default)]
pub struct ColorAdjuster<'s> {
    surface: Option<&'s mut dyn DrawSurface>,
    strip: StripConfig,
}

impl<'s> ColorAdjuster<'s> {
    /// Adjuster with no drawing surface. Plot requests are skipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjuster that draws comparison strips onto `surface`.
    pub fn with_surface(surface: &'s mut dyn DrawSurface) -> Self {
        Self {
            surface: Some(surface),
            strip: StripConfig::default(),
        }
    }

    pub fn strip_config(mut self, config: StripConfig) -> Self {
        self.strip = config;
        self
    }

    /// Lighten or darken every color in `colors` by `factor`.
    ///
    /// Output has the same length and order as the input. When `render` is
    /// set the original and adjusted batches are drawn as two rows.
    pub fn adjust(
        &mut self,
        colors: &ColorBatch,
        factor: AdjustmentFactor,
        render: bool,
    ) -> ColorBatch {
        debug!(count = colors.len(), %factor, render, "adjusting colors");

        let adjusted = colors.map(|c| {
            let out = adjust_color(c, factor);
            trace!(input = %c, output = %out, "adjusted color");
            out
        });

        if render {
            self.render(colors, &adjusted);
        }
        adjusted
    }

    /// Validate loosely typed arguments, then adjust.
    ///
    /// Returns `Ok(None)` when any argument is the explicit null sentinel.
    /// Arguments are checked in order (`cols`, `adj`, `plot`) and the first
    /// failure is returned; colors are parsed only after every argument
    /// has passed.
    pub fn adjust_colours(
        &mut self,
        cols: Arg<Vec<ColorInput>>,
        adj: Arg<FactorInput>,
        plot: Arg<FlagInput>,
    ) -> Result<Option<Vec<String>>, AdjustError> {
        let Some(cols) = cols.resolve(|| AdjustError::ColorNa)? else {
            debug!("cols is null, passing through");
            return Ok(None);
        };
        if cols.iter().any(|c| matches!(c, ColorInput::Na)) {
            return Err(AdjustError::ColorNa);
        }
        if cols.is_empty() {
            return Err(AdjustError::EmptyColors);
        }

        let Some(adj) = adj.resolve(|| AdjustError::ArgumentNa("adj"))? else {
            debug!("adj is null, passing through");
            return Ok(None);
        };
        let factor = AdjustmentFactor::coerce(&adj)?;

        let Some(plot) = plot.resolve(|| AdjustError::ArgumentNa("plot"))? else {
            debug!("plot is null, passing through");
            return Ok(None);
        };
        let render = plot.coerce()?;

        let batch = ColorBatch::from_inputs(&cols)?;
        Ok(Some(self.adjust(&batch, factor, render).to_hex_strings()))
    }

    fn render(&mut self, old: &ColorBatch, new: &ColorBatch) {
        let Some(surface) = self.surface.as_deref_mut() else {
            warn!("plot requested but no drawing surface is attached, skipping");
            return;
        };

        let strip = ComparisonStrip::new(old, new);
        strip.draw(surface, &self.strip);
        info!(colors = strip.len(), "drew comparison strip");
    }
}

/// Adjust with no drawing surface attached.
///
/// See [`ColorAdjuster::adjust_colours`].
pub fn adjust_colours(
    cols: Arg<Vec<ColorInput>>,
    adj: Arg<FactorInput>,
    plot: Arg<FlagInput>,
) -> Result<Option<Vec<String>>, AdjustError> {
    ColorAdjuster::new().adjust_colours(cols, adj, plot)
}
