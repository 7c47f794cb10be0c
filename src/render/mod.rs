//! Vector-field rendering: glyph state, rasterization and the animation driver.

/// Arrow glyph set and its fixed viewport.
pub mod field;
/// Rendered frame buffer.
pub mod frame;
/// Frame-by-frame animation driver.
pub mod pipeline;
/// CPU rasterization via `vello_cpu`.
pub mod raster;
