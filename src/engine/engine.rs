//! The tile computation engine.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::algebra::Field;
use crate::tile::{SampleError, SampleRequest, TileData, TileSampler};

use super::handle::{completion, TileHandle, TileSlot};

/// A queued request paired with its completion slot.
///
/// Lives only inside the queue between enqueue and dequeue; once popped it
/// is exclusively owned by the worker processing it.
struct PendingRequest<F: Field> {
    request: SampleRequest<F>,
    slot: TileSlot,
}

/// Everything the workers share, guarded by one lock so the shutdown flag
/// and the queue are always observed consistently.
struct EngineState<F: Field> {
    queue: VecDeque<PendingRequest<F>>,
    shutdown: bool,
}

/// Schedules tile computations across any number of worker loops.
///
/// One long-lived engine is shared (via [`Arc`]) between the front end and
/// the workers. Producers call [`enqueue`](FractalEngine::enqueue) and get a
/// handle back without blocking; each worker runs
/// [`run_worker`](FractalEngine::run_worker) until
/// [`shutdown`](FractalEngine::shutdown).
///
/// The queue is the only mutable shared state. Workers never hold its lock
/// while computing or while blocked waiting for work ([`Condvar::wait`]
/// releases the lock), so producers are never stalled by a busy pool.
pub struct FractalEngine<F: Field> {
    sampler: Arc<dyn TileSampler<F>>,
    state: Mutex<EngineState<F>>,
    work_available: Condvar,
}

impl<F: Field> FractalEngine<F> {
    /// Creates an engine that computes tiles with the given sampler.
    pub fn new(sampler: Arc<dyn TileSampler<F>>) -> Self {
        Self {
            sampler,
            state: Mutex::new(EngineState {
                queue: VecDeque::new(),
                shutdown: false,
            }),
            work_available: Condvar::new(),
        }
    }

    /// Submits a request for asynchronous computation.
    ///
    /// Appends atomically to the tail of the FIFO, wakes one waiting worker,
    /// and returns immediately. Multiple producers may call concurrently;
    /// their relative order is unspecified but each enqueue is atomic.
    ///
    /// After [`shutdown`](FractalEngine::shutdown) the returned handle is
    /// already fulfilled with [`SampleError::Cancelled`].
    pub fn enqueue(&self, request: SampleRequest<F>) -> TileHandle {
        let (slot, handle) = completion();

        let mut state = self.lock_state();
        if state.shutdown {
            drop(state);
            slot.fulfill(Err(SampleError::Cancelled));
            return handle;
        }
        state.queue.push_back(PendingRequest { request, slot });
        debug!(queued = state.queue.len(), "request enqueued");
        drop(state);

        self.work_available.notify_one();
        handle
    }

    /// Computes a request synchronously on the calling thread.
    ///
    /// Bypasses the queue but runs the exact same sampler as the worker
    /// path, so there is no algorithmic divergence between the two.
    pub fn compute(&self, request: &SampleRequest<F>) -> Result<TileData, SampleError> {
        self.sampler.sample(request)
    }

    /// Runs the blocking worker loop on the calling thread.
    ///
    /// Repeatedly pops the head of the FIFO, releases the lock, computes the
    /// tile, and fulfills the handle. Sampler errors are delivered through
    /// the handle as a failure outcome; one bad request never stops the
    /// loop. On an empty queue the worker blocks until an enqueue or
    /// shutdown wakes it, and it exits once the shutdown flag is observed
    /// with no work left. A worker mid-computation always finishes its
    /// current item first.
    pub fn run_worker(&self) {
        debug!("worker loop started");
        loop {
            let entry = {
                let mut state = self.lock_state();
                loop {
                    if let Some(entry) = state.queue.pop_front() {
                        break Some(entry);
                    }
                    if state.shutdown {
                        break None;
                    }
                    state = self
                        .work_available
                        .wait(state)
                        .expect("engine state lock poisoned");
                }
            };

            let Some(entry) = entry else {
                break;
            };

            let outcome = self.sampler.sample(&entry.request);
            if let Err(error) = &outcome {
                warn!(%error, "tile computation failed");
            }
            entry.slot.fulfill(outcome);
        }
        debug!("worker loop stopped");
    }

    /// Shuts the engine down.
    ///
    /// Sets the termination flag, drains every still-queued entry fulfilling
    /// its handle with [`SampleError::Cancelled`], and wakes all blocked
    /// workers. A worker mid-computation finishes its current item and then
    /// exits; already-fulfilled handles are untouched. Idempotent.
    pub fn shutdown(&self) {
        let drained = {
            let mut state = self.lock_state();
            state.shutdown = true;
            std::mem::take(&mut state.queue)
        };
        if !drained.is_empty() {
            info!(cancelled = drained.len(), "cancelling queued requests");
        }
        for entry in drained {
            entry.slot.fulfill(Err(SampleError::Cancelled));
        }
        self.work_available.notify_all();
        info!("engine shut down");
    }

    /// Number of requests queued but not yet started.
    pub fn pending(&self) -> usize {
        self.lock_state().queue.len()
    }

    /// Whether shutdown has been requested.
    pub fn is_shut_down(&self) -> bool {
        self.lock_state().shutdown
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState<F>> {
        self.state.lock().expect("engine state lock poisoned")
    }
}
