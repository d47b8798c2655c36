//! Outbound Ports (Driven Ports / SPI)
//!
//! The two leaf ledgers, addressed by endpoint name per request. A gateway
//! returns the callee's failure unchanged; the service decides how to
//! classify it.

use async_trait::async_trait;
use shared_types::{Bandwidth, CallFailure};

/// Inventory Ledger as seen by the orchestrator
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// `checkCapacity(circuitId)`: the raw record payload.
    async fn check_capacity(
        &self,
        inventory_id: &str,
        circuit_id: &str,
    ) -> Result<Option<Vec<u8>>, CallFailure>;

    /// `allocate(circuitId, amount)`.
    async fn allocate(
        &self,
        inventory_id: &str,
        circuit_id: &str,
        amount: Bandwidth,
    ) -> Result<(), CallFailure>;
}

/// Provisioning Ledger as seen by the orchestrator
#[async_trait]
pub trait ProvisioningGateway: Send + Sync {
    /// `openOrder(orderId)`.
    async fn open_order(&self, provisioning_id: &str, order_id: &str) -> Result<(), CallFailure>;

    /// `complete(orderId, circuitId, requestedBandwidth, operatorId)`.
    async fn complete(
        &self,
        provisioning_id: &str,
        order_id: &str,
        circuit_id: &str,
        requested_bandwidth: Bandwidth,
        operator_id: &str,
    ) -> Result<(), CallFailure>;
}
