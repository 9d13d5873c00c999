//! Error types for tile sampling.

use thiserror::Error;

use crate::algebra::AlgebraError;

/// Errors that can occur while building or computing a tile.
///
/// The scheduler introduces no kinds of its own beyond [`Cancelled`], which
/// marks a request drained unstarted at engine shutdown.
///
/// [`Cancelled`]: SampleError::Cancelled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// A request parameter is out of its valid domain.
    #[error("invalid request: {0}")]
    InvalidArgument(String),

    /// An algebra operation failed during iteration.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// The request was still queued when the engine shut down.
    #[error("request cancelled by engine shutdown")]
    Cancelled,
}
