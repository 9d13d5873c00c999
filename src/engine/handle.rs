//! One-shot completion handle for tile results.
//!
//! A worker delivers its result through a [`TileSlot`]; whoever holds the
//! matching [`TileHandle`] observes it. The pair is built on a capacity-1
//! rendezvous channel: fulfilling consumes the slot, so a result can be set
//! at most once, and receiving moves the data out, so it is observed at most
//! once.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::time::Duration;

use crate::tile::{SampleError, TileData};

/// The outcome a worker delivers for one request.
pub type TileOutcome = Result<TileData, SampleError>;

/// Creates a connected slot/handle pair for one pending request.
pub fn completion() -> (TileSlot, TileHandle) {
    let (sender, receiver) = mpsc::sync_channel(1);
    (TileSlot { sender }, TileHandle { receiver })
}

/// Producer side of the completion pair.
///
/// Held by the engine while the request is queued, then by the worker
/// computing it. Dropping the slot unfulfilled makes the handle report
/// [`SampleError::Cancelled`].
#[derive(Debug)]
pub struct TileSlot {
    sender: SyncSender<TileOutcome>,
}

impl TileSlot {
    /// Delivers the outcome, consuming the slot.
    ///
    /// The send cannot block: the channel has room for exactly the one value
    /// this slot may ever produce. If the consumer dropped its handle the
    /// outcome is discarded.
    pub fn fulfill(self, outcome: TileOutcome) {
        let _ = self.sender.send(outcome);
    }
}

/// Consumer side of the completion pair.
///
/// One-shot: once `poll` or `wait` has produced the outcome, the handle is
/// spent and should be discarded.
#[derive(Debug)]
pub struct TileHandle {
    receiver: Receiver<TileOutcome>,
}

impl TileHandle {
    /// Returns the outcome if it has arrived, without blocking.
    ///
    /// Returns `None` while the computation is still pending. If the slot
    /// was dropped unfulfilled, reports [`SampleError::Cancelled`].
    pub fn poll(&mut self) -> Option<TileOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SampleError::Cancelled)),
        }
    }

    /// Blocks until the outcome arrives and returns it.
    pub fn wait(self) -> TileOutcome {
        match self.receiver.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(SampleError::Cancelled),
        }
    }

    /// Blocks up to `timeout` for the outcome.
    ///
    /// Returns `None` on timeout; the handle stays usable afterwards.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<TileOutcome> {
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => Some(Err(SampleError::Cancelled)),
        }
    }
}
