//! # Test Fixtures
//!
//! A fully started node with a client calling from outside, plus helpers
//! that speak the wire format.

use std::collections::BTreeMap;
use std::time::Duration;

use cr_03_process_orchestrator::{AdmissionMode, PlaceholderPolicy};
use node_runtime::container::EndpointNames;
use node_runtime::{NodeConfig, NodeRuntime};
use shared_bus::ServiceClient;
use shared_types::{CallOutcome, CircuitRecord, LedgerRecord};

/// Caller name used by fixtures.
pub const TEST_CALLER: &str = "test-client";

/// A running node.
pub struct TestNode {
    pub runtime: NodeRuntime,
    pub client: ServiceClient,
    pub endpoints: EndpointNames,
}

impl TestNode {
    /// Start a node with `config` and run its self-test.
    pub async fn start(config: NodeConfig) -> Self {
        let endpoints = config.endpoints.clone();
        let runtime = NodeRuntime::new(config).expect("node builds");
        runtime.start().await.expect("node starts");
        let client = runtime.container().client(TEST_CALLER);
        Self {
            runtime,
            client,
            endpoints,
        }
    }

    /// Observed protocol: admission never allocates.
    pub async fn check_only() -> Self {
        Self::start(NodeConfig::default()).await
    }

    /// Admission allocates before committing.
    pub async fn reserve_on_admit() -> Self {
        let mut config = NodeConfig::default();
        config.orchestrator.admission_mode = AdmissionMode::ReserveOnAdmit;
        Self::start(config).await
    }

    /// The orchestrator only calls `complete`.
    pub async fn require_existing() -> Self {
        let mut config = NodeConfig::default();
        config.orchestrator.placeholder_policy = PlaceholderPolicy::RequireExisting;
        Self::start(config).await
    }

    /// Start with a short call timeout.
    pub async fn with_timeout(timeout: Duration) -> Self {
        let mut config = NodeConfig::default();
        config.bus.call_timeout_ms = timeout.as_millis() as u64;
        Self::start(config).await
    }

    pub async fn create_circuit(&self, circuit_id: &str, total: &str) -> CallOutcome {
        self.client
            .invoke(
                self.endpoints.inventory.as_str(),
                "createCircuit",
                args(&[circuit_id, "metro", "P1", total]),
            )
            .await
    }

    pub async fn allocate(&self, circuit_id: &str, amount: &str) -> CallOutcome {
        self.client
            .invoke(
                self.endpoints.inventory.as_str(),
                "allocate",
                args(&[circuit_id, amount]),
            )
            .await
    }

    /// Current record for `circuit_id`, read over the bus.
    pub async fn capacity(&self, circuit_id: &str) -> CircuitRecord {
        let bytes = self
            .client
            .invoke(&self.endpoints.inventory, "checkCapacity", args(&[circuit_id]))
            .await
            .into_result()
            .expect("checkCapacity succeeds")
            .expect("checkCapacity returns a record");
        CircuitRecord::decode(&bytes).expect("record decodes")
    }

    /// `submit` on the coordinator with the default endpoint names.
    pub async fn submit(&self, order_id: &str, circuit_id: &str, requested: &str) -> CallOutcome {
        self.client
            .invoke(
                &self.endpoints.coordinator,
                "submit",
                args(&[
                    self.endpoints.orchestrator.as_str(),
                    self.endpoints.inventory.as_str(),
                    self.endpoints.provisioning.as_str(),
                    order_id,
                    "op-1",
                    circuit_id,
                    requested,
                ]),
            )
            .await
    }

    pub async fn get_order(&self, order_id: &str) -> CallOutcome {
        self.client
            .invoke(
                &self.endpoints.coordinator,
                "getOrder",
                args(&[self.endpoints.provisioning.as_str(), order_id]),
            )
            .await
    }

    pub async fn open_order(&self, order_id: &str) -> CallOutcome {
        self.client
            .invoke(&self.endpoints.provisioning, "openOrder", args(&[order_id]))
            .await
    }

    pub fn inventory_snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.runtime.container().stores.inventory.snapshot()
    }

    pub fn provisioning_snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.runtime.container().stores.provisioning.snapshot()
    }

    pub async fn stop(self) {
        self.runtime.shutdown().await;
    }
}

/// Owned argument list from string slices.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
