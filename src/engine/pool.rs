//! Worker thread pool.
//!
//! Convenience wrapper that spawns named OS threads each running the
//! engine's blocking worker loop. Hosts that want to manage threads
//! themselves can call [`FractalEngine::run_worker`] directly instead.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::info;

use crate::algebra::Field;

use super::config::PoolConfig;
use super::engine::FractalEngine;

/// A fixed set of worker threads draining one engine's queue.
pub struct WorkerPool<F: Field> {
    engine: Arc<FractalEngine<F>>,
    workers: Vec<JoinHandle<()>>,
}

impl<F: Field> WorkerPool<F> {
    /// Spawns `config.threads` worker threads against the engine.
    pub fn spawn(engine: Arc<FractalEngine<F>>, config: PoolConfig) -> Self {
        info!(threads = config.threads, "starting fractal worker pool");

        let workers = (0..config.threads)
            .map(|i| {
                let engine = Arc::clone(&engine);
                thread::Builder::new()
                    .name(format!("frac-worker-{}", i))
                    .spawn(move || engine.run_worker())
                    .expect("failed to spawn fractal worker thread")
            })
            .collect();

        Self { engine, workers }
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.workers.len()
    }

    /// Shuts the engine down and joins every worker.
    ///
    /// Workers finish their in-flight computation before exiting; queued
    /// requests are cancelled by the engine.
    pub fn shutdown(self) {
        self.engine.shutdown();
        for worker in self.workers {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PreciseRect;
    use crate::tile::{SampleError, SampleRequest, TileData, TileSampler};

    struct InstantSampler;

    impl TileSampler<f64> for InstantSampler {
        fn sample(&self, request: &SampleRequest<f64>) -> Result<TileData, SampleError> {
            Ok(TileData::sized_for(request))
        }
    }

    fn request() -> SampleRequest<f64> {
        let rect = PreciseRect::from_corners(0.0, 0.0, 1.0, 1.0);
        SampleRequest::new(rect, 2, 2, 53, 5, 2.0).unwrap()
    }

    #[test]
    fn test_pool_spawns_requested_threads() {
        let engine = Arc::new(FractalEngine::<f64>::new(Arc::new(InstantSampler) as _));
        let pool = WorkerPool::spawn(Arc::clone(&engine), PoolConfig::default().with_threads(2));
        assert_eq!(pool.threads(), 2);
        pool.shutdown();
    }

    #[test]
    fn test_pool_processes_requests_and_shuts_down() {
        let engine = Arc::new(FractalEngine::<f64>::new(Arc::new(InstantSampler) as _));
        let pool = WorkerPool::spawn(Arc::clone(&engine), PoolConfig::default().with_threads(3));

        let handles: Vec<_> = (0..12).map(|_| engine.enqueue(request())).collect();
        for handle in handles {
            assert!(handle.wait().is_ok());
        }

        pool.shutdown();
        assert!(engine.is_shut_down());
    }
}
