//! # In-Memory Event Bus
//!
//! Routes calls to endpoint queues and replies back to the one caller
//! waiting on them.
//!
//! - Each registered endpoint owns a bounded `mpsc` queue of `capacity`
//!   calls. A full queue makes callers wait; calls are never dropped.
//! - Each outstanding call holds a `oneshot` slot in the pending table,
//!   keyed by correlation id.

use crate::events::{CallReply, CallRequest};
use crate::queue::{CallQueue, PendingReply, PendingTable};
use crate::DEFAULT_CHANNEL_CAPACITY;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Errors from routing a call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("no endpoint registered")]
    NotRegistered,

    #[error("endpoint '{0}' is already served")]
    EndpointTaken(String),

    #[error("endpoint stopped accepting calls")]
    EndpointClosed,

    #[error("event bus closed")]
    Closed,
}

/// Traffic counters since the bus was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusStats {
    /// Calls accepted into an endpoint queue.
    pub calls_dispatched: u64,
    /// Replies handed to a waiting caller.
    pub replies_delivered: u64,
    /// Replies whose caller had already given up.
    pub replies_orphaned: u64,
}

#[derive(Default)]
struct Counters {
    calls_dispatched: AtomicU64,
    replies_delivered: AtomicU64,
    replies_orphaned: AtomicU64,
}

/// In-memory implementation of the event bus.
///
/// Suitable for single-node operation; each service still owns its own
/// store and is addressed only by its endpoint name.
pub struct InMemoryEventBus {
    /// Call queues by endpoint name.
    endpoints: RwLock<HashMap<String, mpsc::Sender<CallRequest>>>,

    /// Callers waiting for a reply, by correlation id.
    pending: PendingTable,

    counters: Counters,

    /// Per-endpoint queue capacity.
    capacity: usize,
}

impl InMemoryEventBus {
    /// Create a new in-memory event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory event bus with specified capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            endpoints: RwLock::new(HashMap::new()),
            pending: Arc::new(Mutex::new(HashMap::new())),
            counters: Counters::default(),
            capacity: capacity.max(1),
        }
    }

    /// Start serving `name` and return its call queue.
    pub fn register_endpoint(&self, name: &str) -> Result<CallQueue, BusError> {
        let mut endpoints = self.endpoints.write();
        if endpoints.contains_key(name) {
            warn!(endpoint = name, "Endpoint already registered");
            return Err(BusError::EndpointTaken(name.to_string()));
        }

        let (sender, receiver) = mpsc::channel(self.capacity);
        endpoints.insert(name.to_string(), sender);
        info!(endpoint = name, capacity = self.capacity, "Endpoint registered");
        Ok(CallQueue::new(name.to_string(), receiver))
    }

    /// Stop routing calls to `name`. Returns false if it was not registered.
    ///
    /// Calls already queued stay in the endpoint's [`CallQueue`].
    pub fn unregister_endpoint(&self, name: &str) -> bool {
        let removed = self.endpoints.write().remove(name).is_some();
        if removed {
            info!(endpoint = name, "Endpoint unregistered");
        }
        removed
    }

    /// True when some host currently serves `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.endpoints.read().contains_key(name)
    }

    /// Registered endpoint names, sorted.
    #[must_use]
    pub fn endpoints(&self) -> Vec<String> {
        let mut names: Vec<String> = self.endpoints.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Queue `request` on its target and return the slot its reply lands in.
    ///
    /// Waits while the target's queue is full.
    pub async fn dispatch(&self, request: CallRequest) -> Result<PendingReply, BusError> {
        let queue = self
            .endpoints
            .read()
            .get(&request.target)
            .cloned()
            .ok_or(BusError::NotRegistered)?;

        let (sender, receiver) = oneshot::channel();
        self.pending
            .lock()
            .insert(request.correlation_id.clone(), sender);
        let reply = PendingReply::new(
            request.correlation_id.clone(),
            receiver,
            Arc::clone(&self.pending),
        );

        // On failure `reply` drops here and clears its pending entry
        queue
            .send(request)
            .await
            .map_err(|_| BusError::EndpointClosed)?;

        self.counters.calls_dispatched.fetch_add(1, Ordering::Relaxed);
        Ok(reply)
    }

    /// Hand `reply` to the caller waiting on its correlation id.
    ///
    /// Returns false when nobody is waiting any more.
    pub fn reply(&self, reply: CallReply) -> bool {
        let waiting = self.pending.lock().remove(&reply.correlation_id);
        let delivered = match waiting {
            Some(sender) => sender.send(reply.outcome).is_ok(),
            None => false,
        };

        if delivered {
            self.counters.replies_delivered.fetch_add(1, Ordering::Relaxed);
            debug!(correlation_id = %reply.correlation_id, source = %reply.source, "Reply delivered");
        } else {
            self.counters.replies_orphaned.fetch_add(1, Ordering::Relaxed);
            warn!(
                correlation_id = %reply.correlation_id,
                source = %reply.source,
                "Reply dropped: caller no longer waiting"
            );
        }
        delivered
    }

    /// Calls still waiting for a reply.
    #[must_use]
    pub fn pending_calls(&self) -> usize {
        self.pending.lock().len()
    }

    #[must_use]
    pub fn stats(&self) -> BusStats {
        BusStats {
            calls_dispatched: self.counters.calls_dispatched.load(Ordering::Relaxed),
            replies_delivered: self.counters.replies_delivered.load(Ordering::Relaxed),
            replies_orphaned: self.counters.replies_orphaned.load(Ordering::Relaxed),
        }
    }

    /// Get the per-endpoint queue capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}
