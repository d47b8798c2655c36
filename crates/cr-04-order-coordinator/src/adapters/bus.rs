//! Bus adapters for the orchestrator and the provisioning read-back

use crate::ports::outbound::{OrchestratorGateway, ProvisioningReader};
use async_trait::async_trait;
use shared_bus::ServiceClient;
use shared_types::{CallFailure, Operation, OrchestratorOperation, ProvisioningOperation};

/// Process Orchestrator reached over the bus.
pub struct BusOrchestratorGateway {
    client: ServiceClient,
}

impl BusOrchestratorGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrchestratorGateway for BusOrchestratorGateway {
    async fn admit(&self, orchestrator_id: &str, args: Vec<String>) -> Result<(), CallFailure> {
        self.client
            .invoke(orchestrator_id, OrchestratorOperation::Admit.name(), args)
            .await
            .into_result()
            .map(|_| ())
    }
}

/// Provisioning Ledger `get` reached over the bus.
pub struct BusProvisioningReader {
    client: ServiceClient,
}

impl BusProvisioningReader {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProvisioningReader for BusProvisioningReader {
    async fn get(
        &self,
        provisioning_id: &str,
        order_id: &str,
    ) -> Result<Option<Vec<u8>>, CallFailure> {
        self.client
            .invoke(
                provisioning_id,
                ProvisioningOperation::Get.name(),
                vec![order_id.to_string()],
            )
            .await
            .into_result()
    }
}
