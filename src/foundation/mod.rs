/// Shared value types (frames, fps, canvas, 2D vectors).
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
