//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::CallFailure;

/// Process Orchestrator as seen by the coordinator
#[async_trait]
pub trait OrchestratorGateway: Send + Sync {
    /// `admit(...)` on the named orchestrator, arguments already in order.
    async fn admit(&self, orchestrator_id: &str, args: Vec<String>) -> Result<(), CallFailure>;
}

/// Read side of the Provisioning Ledger
#[async_trait]
pub trait ProvisioningReader: Send + Sync {
    /// `get(orderId)`.
    async fn get(
        &self,
        provisioning_id: &str,
        order_id: &str,
    ) -> Result<Option<Vec<u8>>, CallFailure>;
}
