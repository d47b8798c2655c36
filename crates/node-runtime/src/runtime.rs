//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Build the service container from configuration
//! 2. Register services leaves first
//! 3. Host every service on the bus
//! 4. Bootstrap self-test: one `init` per service
//! 5. Signal ready

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use shared_types::{SystemTimeSource, TimeSource};
use tracing::{error, info, warn};

use crate::container::{NodeConfig, ServiceContainer};
use crate::registry::{ServiceId, ServiceRegistry};

/// Key written by the bootstrap self-test.
pub const SELF_TEST_KEY: &str = "selftest";

/// Caller name used by the runtime on the bus.
pub const RUNTIME_CALLER: &str = "node-runtime";

/// Upper bound on waiting for hosts to exit at shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// The main node runtime hosting all services.
pub struct NodeRuntime {
    container: Arc<ServiceContainer>,
    registry: ServiceRegistry,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl NodeRuntime {
    /// Build every service and register it, leaves first.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating Circuit-Reserve node runtime");

        let container =
            Arc::new(ServiceContainer::new(config).context("Failed to build services")?);
        let registry = ServiceRegistry::new(Arc::clone(&container.event_bus));

        for id in ServiceId::start_order() {
            registry
                .register(id, container.endpoint_name(id), container.endpoint(id))
                .with_context(|| format!("Failed to register {}", id.name()))?;
        }

        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

        Ok(Self {
            container,
            registry,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Host every service on the bus and run the self-test.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  Circuit-Reserve Node Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        self.registry
            .start_all(&self.shutdown_rx)
            .context("Failed to host services")?;
        self.self_test().await?;

        self.registry.print_status();
        info!(
            admission_mode = %self.container.config.orchestrator.admission_mode,
            call_timeout_ms = self.container.config.bus.call_timeout_ms,
            "All services running"
        );
        Ok(())
    }

    /// One `init(selftest, <timestamp>)` per service, leaves first.
    async fn self_test(&self) -> Result<()> {
        let client = self.container.client(RUNTIME_CALLER);
        let stamp = SystemTimeSource.timestamp();

        for id in ServiceId::start_order() {
            let name = self.container.endpoint_name(id);
            let outcome = client.init(name, SELF_TEST_KEY, &stamp).await;
            if let Err(failure) = outcome.into_result() {
                error!("[{}] Self-test failed: {}", id.name(), failure);
                bail!("self-test of {} failed: {}", id.name(), failure);
            }
            info!("[{}] Self-test passed", id.name());
        }
        Ok(())
    }

    /// Signal every host to stop and wait for them.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        if tokio::time::timeout(SHUTDOWN_GRACE, self.registry.join_all())
            .await
            .is_err()
        {
            warn!("Hosts did not stop within {:?}", SHUTDOWN_GRACE);
        }

        info!("Shutdown complete");
    }

    /// Get a reference to the service container.
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }
}
