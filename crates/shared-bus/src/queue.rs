//! # Call Queues and Pending Replies
//!
//! The two point-to-point halves of a call:
//!
//! - [`CallQueue`] is an endpoint's bounded inbox. Senders wait for room
//!   instead of dropping calls.
//! - [`PendingReply`] is a caller's slot in the bus's pending table. Only
//!   the reply with its correlation id can fill it.

use crate::bus::BusError;
use crate::events::CallRequest;
use parking_lot::Mutex;
use shared_types::CallOutcome;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

pub(crate) type PendingTable = Arc<Mutex<HashMap<String, oneshot::Sender<CallOutcome>>>>;

/// Receiving side of one endpoint's calls.
pub struct CallQueue {
    name: String,
    receiver: mpsc::Receiver<CallRequest>,
}

impl CallQueue {
    pub(crate) fn new(name: String, receiver: mpsc::Receiver<CallRequest>) -> Self {
        Self { name, receiver }
    }

    /// Endpoint name this queue serves.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next queued call, or `None` once the endpoint is unregistered and
    /// the queue is drained.
    pub async fn recv(&mut self) -> Option<CallRequest> {
        self.receiver.recv().await
    }

    /// Stop accepting calls and hand back the ones still queued.
    pub fn close(&mut self) -> Vec<CallRequest> {
        self.receiver.close();
        let mut remaining = Vec::new();
        while let Ok(request) = self.receiver.try_recv() {
            remaining.push(request);
        }
        if !remaining.is_empty() {
            debug!(endpoint = %self.name, count = remaining.len(), "Queue closed with calls pending");
        }
        remaining
    }
}

/// A caller waiting for one reply.
///
/// Dropping it (for example on timeout) removes its entry from the pending
/// table, so a late reply is counted as orphaned instead of leaking.
pub struct PendingReply {
    correlation_id: String,
    receiver: oneshot::Receiver<CallOutcome>,
    pending: PendingTable,
}

impl PendingReply {
    pub(crate) fn new(
        correlation_id: String,
        receiver: oneshot::Receiver<CallOutcome>,
        pending: PendingTable,
    ) -> Self {
        Self {
            correlation_id,
            receiver,
            pending,
        }
    }

    #[must_use]
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Wait for the reply.
    pub async fn recv(&mut self) -> Result<CallOutcome, BusError> {
        (&mut self.receiver).await.map_err(|_| BusError::Closed)
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        self.pending.lock().remove(&self.correlation_id);
    }
}
