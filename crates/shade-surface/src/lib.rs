//! Drawing surfaces for shade comparison strips.
//!
//! [`RasterSurface`] paints into an in-memory `image::RgbaImage`;
//! [`SvgSurface`] builds an SVG document. Both implement
//! [`shade_core::DrawSurface`].

mod glyphs;
mod raster;
mod svg;

pub use raster::RasterSurface;
pub use svg::SvgSurface;
