//! # Shared Bus - Request/Response Bus for Inter-Service Communication
//!
//! The four capacity reservation services never share memory. Every
//! cross-service call is queued on the target endpoint's own call queue and
//! answered through a pending-reply slot held only by the caller.
//!
//! ```text
//! ┌──────────────┐   CallRequest      ┌──────────────┐
//! │ Orchestrator │ ─────────────────► │  Inventory   │
//! │ ServiceClient│   (endpoint queue) │ EndpointHost │
//! │              │ ◄───────────────── │              │
//! └──────────────┘   CallReply        └──────────────┘
//!                 (pending table, by correlation id)
//! ```
//!
//! ## Guarantees
//!
//! - A call to an endpoint nobody serves fails immediately.
//! - A full endpoint queue makes the caller wait; calls are never dropped.
//! - A call waits a bounded time for its reply; expiry is a failure.
//! - No retries and no exactly-once delivery.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod bus;
pub mod client;
pub mod endpoint;
pub mod events;
pub mod queue;

// Re-export main types
pub use bus::{BusError, BusStats, InMemoryEventBus};
pub use client::{ServiceClient, DEFAULT_CALL_TIMEOUT};
pub use endpoint::{init_into_store, ServiceEndpoint};
pub use events::{CallReply, CallRequest, LedgerCall};
pub use queue::{CallQueue, PendingReply};

/// Calls buffered per endpoint before callers wait for room.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
