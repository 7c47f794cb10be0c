/// Convenience result type used across flockviz.
pub type FlockResult<T> = Result<T, FlockError>;

/// Top-level error taxonomy used by loader and renderer APIs.
///
/// Lines that fail the record pattern are not represented here: they are dropped by the loader
/// and only counted in [`crate::LoadStats`].
#[derive(thiserror::Error, Debug)]
pub enum FlockError {
    /// The trajectory source could not be opened or read.
    #[error("resource error: {0}")]
    Resource(String),

    /// A rendered step lacks an agent present at step 0 (or step 0 lacks an agent a later step
    /// holds).
    #[error("sparse population: step {step} has no entry for agent {agent}")]
    SparsePopulation {
        /// Step whose row is missing the cell.
        step: usize,
        /// Agent id of the missing cell.
        agent: usize,
    },

    /// The output encoder is unavailable or failed while writing.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlockError {
    /// Build a [`FlockError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`FlockError::SparsePopulation`] value.
    pub fn sparse(step: usize, agent: usize) -> Self {
        Self::SparsePopulation { step, agent }
    }

    /// Build a [`FlockError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FlockError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
