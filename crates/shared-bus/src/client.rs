//! # Service Client
//!
//! The caller side of a cross-service call:
//! `invoke(serviceId, functionName, args) -> outcome`.
//!
//! A call takes a slot in the bus's pending table, queues its request on
//! the target endpoint and waits at most `timeout` for the matching reply.
//! Expiry, an unregistered target and a stopped endpoint all surface as
//! `UpstreamUnavailable`. Nothing is retried.

use crate::bus::InMemoryEventBus;
use crate::events::{CallRequest, LedgerCall};
use shared_types::{CallFailure, CallOutcome};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default bound on a single cross-service call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Issues calls on behalf of one named caller.
#[derive(Clone)]
pub struct ServiceClient {
    bus: Arc<InMemoryEventBus>,
    caller: String,
    timeout: Duration,
}

impl ServiceClient {
    pub fn new(bus: Arc<InMemoryEventBus>, caller: impl Into<String>) -> Self {
        Self {
            bus,
            caller: caller.into(),
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Name this client calls as.
    #[must_use]
    pub fn caller(&self) -> &str {
        &self.caller
    }

    /// Configured per-call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Call `function` on the endpoint named `target`.
    pub async fn invoke(&self, target: &str, function: &str, args: Vec<String>) -> CallOutcome {
        self.call(
            target,
            LedgerCall::Invoke {
                function: function.to_string(),
                args,
            },
        )
        .await
    }

    /// Bootstrap `init(key, value)` on the endpoint named `target`.
    pub async fn init(&self, target: &str, key: &str, value: &str) -> CallOutcome {
        self.call(
            target,
            LedgerCall::Init {
                args: vec![key.to_string(), value.to_string()],
            },
        )
        .await
    }

    async fn call(&self, target: &str, call: LedgerCall) -> CallOutcome {
        let correlation_id = Uuid::new_v4().to_string();
        let function = call.function().to_string();

        debug!(
            caller = %self.caller,
            target,
            function = %function,
            correlation_id = %correlation_id,
            "Sending call"
        );

        let request = CallRequest {
            correlation_id,
            source: self.caller.clone(),
            target: target.to_string(),
            call,
        };
        let exchange = async {
            let mut reply = self.bus.dispatch(request).await?;
            reply.recv().await
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(outcome)) => {
                debug!(
                    target,
                    function = %function,
                    success = outcome.is_success(),
                    "Reply received"
                );
                outcome
            }
            Ok(Err(e)) => {
                warn!(caller = %self.caller, target, function = %function, "Call not delivered: {}", e);
                CallFailure::unavailable(target, e).into()
            }
            Err(_) => {
                warn!(
                    caller = %self.caller,
                    target,
                    function = %function,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Call timed out"
                );
                CallFailure::unavailable(
                    target,
                    format!("no reply within {}ms", self.timeout.as_millis()),
                )
                .into()
            }
        }
    }
}
