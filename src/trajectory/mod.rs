//! Trajectory ingestion: record log lines into step/agent tensors.

/// Rectangular tensors produced from a loaded trajectory.
pub mod dense;
/// Single-pass loader and ragged tensor.
pub mod loader;
/// Line pattern matching.
pub mod record;
