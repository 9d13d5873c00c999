//! Fractile - escape-time fractal tiles over generic algebras
//!
//! This library computes Mandelbrot-family escape-time tiles over a
//! user-selectable algebra (ordinary complex numbers, split-complex numbers,
//! or any other finite-dimensional associative algebra defined by a structure
//! tensor), at arbitrary numeric precision, and distributes the computations
//! across a worker pool so an interactive front end never blocks on
//! long-running high-precision arithmetic.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use fractile::algebra::ComplexTensor;
//! use fractile::engine::{FractalEngine, PoolConfig, WorkerPool};
//! use fractile::geom::PreciseRect;
//! use fractile::tile::{EscapeTimeSampler, SampleRequest, TileSampler};
//! use rug::Float;
//!
//! let sampler: Arc<dyn TileSampler<Float>> =
//!     Arc::new(EscapeTimeSampler::<ComplexTensor>::new());
//! let engine = Arc::new(FractalEngine::new(sampler));
//! let pool = WorkerPool::spawn(Arc::clone(&engine), PoolConfig::default());
//!
//! let rect = PreciseRect::from_corners(
//!     Float::with_val(64, -2),
//!     Float::with_val(64, -2),
//!     Float::with_val(64, 2),
//!     Float::with_val(64, 2),
//! );
//! let request = SampleRequest::new(rect, 256, 256, 64, 1000, Float::with_val(64, 2))?;
//!
//! // Returns immediately; the result arrives on a worker thread.
//! let handle = engine.enqueue(request);
//! let data = handle.wait()?;
//!
//! pool.shutdown();
//! ```

pub mod algebra;
pub mod engine;
pub mod geom;
pub mod tile;

/// Version of the fractile library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
