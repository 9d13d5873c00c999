//! Tile sampling abstraction layer.
//!
//! This module provides the request/result value objects for one tile of the
//! algebraic plane, the [`TileSampler`] trait that decouples the engine from
//! the concrete computation, and the escape-time sampler itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    FractalEngine                            │
//! │            (depends on Arc<dyn TileSampler<F>>)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TileSampler<F> trait                      │
//! │        sample(&SampleRequest<F>) -> TileData                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │  EscapeTimeSampler<T,N> │   │    mock samplers            │
//! │  (z ← z·z + c over the  │   │    (for testing)            │
//! │   algebra with tensor T)│   └─────────────────────────────┘
//! └─────────────────────────┘
//! ```

mod data;
mod error;
mod escape_time;
mod request;
mod sampler;

pub use data::TileData;
pub use error::SampleError;
pub use escape_time::EscapeTimeSampler;
pub use request::SampleRequest;
pub use sampler::TileSampler;
