//! Bus adapters for the leaf ledgers
//!
//! Each gateway call becomes one `invoke` on the event bus, addressed to the
//! endpoint name carried by the request.

use crate::ports::outbound::{InventoryGateway, ProvisioningGateway};
use async_trait::async_trait;
use shared_bus::ServiceClient;
use shared_types::{Bandwidth, CallFailure, InventoryOperation, Operation, ProvisioningOperation};

/// Inventory Ledger reached over the bus.
pub struct BusInventoryGateway {
    client: ServiceClient,
}

impl BusInventoryGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryGateway for BusInventoryGateway {
    async fn check_capacity(
        &self,
        inventory_id: &str,
        circuit_id: &str,
    ) -> Result<Option<Vec<u8>>, CallFailure> {
        self.client
            .invoke(
                inventory_id,
                InventoryOperation::CheckCapacity.name(),
                vec![circuit_id.to_string()],
            )
            .await
            .into_result()
    }

    async fn allocate(
        &self,
        inventory_id: &str,
        circuit_id: &str,
        amount: Bandwidth,
    ) -> Result<(), CallFailure> {
        self.client
            .invoke(
                inventory_id,
                InventoryOperation::Allocate.name(),
                vec![circuit_id.to_string(), amount.to_string()],
            )
            .await
            .into_result()
            .map(|_| ())
    }
}

/// Provisioning Ledger reached over the bus.
pub struct BusProvisioningGateway {
    client: ServiceClient,
}

impl BusProvisioningGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProvisioningGateway for BusProvisioningGateway {
    async fn open_order(&self, provisioning_id: &str, order_id: &str) -> Result<(), CallFailure> {
        self.client
            .invoke(
                provisioning_id,
                ProvisioningOperation::OpenOrder.name(),
                vec![order_id.to_string()],
            )
            .await
            .into_result()
            .map(|_| ())
    }

    async fn complete(
        &self,
        provisioning_id: &str,
        order_id: &str,
        circuit_id: &str,
        requested_bandwidth: Bandwidth,
        operator_id: &str,
    ) -> Result<(), CallFailure> {
        self.client
            .invoke(
                provisioning_id,
                ProvisioningOperation::Complete.name(),
                vec![
                    order_id.to_string(),
                    circuit_id.to_string(),
                    requested_bandwidth.to_string(),
                    operator_id.to_string(),
                ],
            )
            .await
            .into_result()
            .map(|_| ())
    }
}
