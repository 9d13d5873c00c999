//! Tile sampler trait definition.

use crate::algebra::Field;

use super::data::TileData;
use super::error::SampleError;
use super::request::SampleRequest;

/// Computes the escape-step data for one tile request.
///
/// This is the seam between the scheduling engine and the actual
/// computation: the engine only ever calls `sample`, so tests can substitute
/// a mock and the synchronous and worker paths share the same algorithm by
/// construction.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one sampler instance is shared by
/// every worker thread.
pub trait TileSampler<F: Field>: Send + Sync {
    /// Samples the requested tile.
    ///
    /// Must be pure and stateless aside from the output buffer: identical
    /// requests always produce identical results.
    fn sample(&self, request: &SampleRequest<F>) -> Result<TileData, SampleError>;
}
