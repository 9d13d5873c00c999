//! Work-queue scheduling engine.
//!
//! This module distributes tile computations across a pool of worker
//! threads. Producers enqueue a [`SampleRequest`](crate::tile::SampleRequest)
//! and immediately receive a [`TileHandle`] for the future result; worker
//! loops drain a shared FIFO and fulfill each handle exactly once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Front end                             │
//! │        enqueue(request) -> TileHandle   (never blocks)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     FractalEngine                           │
//! │  - FIFO of (request, slot) pairs under one Mutex + Condvar  │
//! │  - shutdown flag shared with all workers                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┼──────────────┐
//!               ▼              ▼              ▼
//!        ┌────────────┐ ┌────────────┐ ┌────────────┐
//!        │ worker 0   │ │ worker 1   │ │ worker n   │
//!        │ run_worker │ │ run_worker │ │ run_worker │
//!        └────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! Per-entry life cycle is strictly `Queued → InProgress → Fulfilled`; there
//! is no per-request cancellation, and completion order across workers is
//! not the enqueue order (slow tiles may finish after cheap later ones).

mod config;
mod engine;
mod handle;
mod pool;

pub use config::PoolConfig;
pub use engine::FractalEngine;
pub use handle::{completion, TileHandle, TileSlot};
pub use pool::WorkerPool;
