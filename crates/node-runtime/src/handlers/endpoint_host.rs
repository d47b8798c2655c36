//! # Endpoint Host
//!
//! Serves one [`ServiceEndpoint`] on the bus under its endpoint name.
//!
//! Every incoming call is handled in its own task, so calls to the same
//! service run concurrently and interleave at the store.

use shared_bus::{
    BusError, CallQueue, CallReply, CallRequest, InMemoryEventBus, ServiceEndpoint,
};
use shared_types::CallFailure;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Host for a single service endpoint.
pub struct EndpointHost {
    name: String,
    endpoint: Arc<dyn ServiceEndpoint>,
    bus: Arc<InMemoryEventBus>,
}

impl EndpointHost {
    pub fn new(
        name: impl Into<String>,
        endpoint: Arc<dyn ServiceEndpoint>,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint,
            bus,
        }
    }

    /// Register the endpoint name and spawn the serve loop.
    ///
    /// The name is registered before this returns, so callers can reach the
    /// endpoint immediately. When `shutdown` changes the loop unregisters
    /// the name and fails every call still queued.
    pub fn start(self, mut shutdown: watch::Receiver<bool>) -> Result<JoinHandle<()>, BusError> {
        let mut queue = self.bus.register_endpoint(&self.name)?;

        let tag = self.endpoint.service_tag();
        info!("[{}] Serving on '{}'", tag, self.name);

        Ok(tokio::spawn(async move {
            loop {
                tokio::select! {
                    request = queue.recv() => match request {
                        Some(request) => self.dispatch(request),
                        None => {
                            warn!("[{}] Call queue closed", tag);
                            break;
                        }
                    },
                    _ = shutdown.changed() => {
                        info!("[{}] Shutdown signal received", tag);
                        break;
                    }
                }
            }
            self.bus.unregister_endpoint(&self.name);
            self.fail_queued(&mut queue);
        }))
    }

    fn dispatch(&self, request: CallRequest) {
        let endpoint = Arc::clone(&self.endpoint);
        let bus = Arc::clone(&self.bus);
        let name = self.name.clone();

        tokio::spawn(async move {
            let CallRequest {
                correlation_id,
                source,
                call,
                ..
            } = request;
            let function = call.function().to_string();
            let outcome = endpoint.handle(call).await;
            debug!(
                caller = %source,
                function = %function,
                correlation_id = %correlation_id,
                success = outcome.is_success(),
                "[{}] Call handled",
                endpoint.service_tag()
            );
            bus.reply(CallReply::new(correlation_id, name, outcome));
        });
    }

    fn fail_queued(&self, queue: &mut CallQueue) {
        let tag = self.endpoint.service_tag();
        for request in queue.close() {
            warn!(
                caller = %request.source,
                function = %request.call.function(),
                correlation_id = %request.correlation_id,
                "[{}] Failing call queued at shutdown",
                tag
            );
            let failure = CallFailure::unavailable(&self.name, "endpoint stopped");
            self.bus.reply(CallReply::new(
                request.correlation_id,
                self.name.clone(),
                failure.into(),
            ));
        }
    }
}
