//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::ProvisioningError;
use crate::domain::lifecycle::CompletedOrder;
use async_trait::async_trait;
use shared_types::{Bandwidth, OrderRecord, PendingOrder};

/// Primary Provisioning Ledger API
///
/// The only writer of completed-order state.
#[async_trait]
pub trait ProvisioningLedgerApi: Send + Sync {
    /// Establish the order key with a pending placeholder.
    async fn open_order(&self, order_id: &str) -> Result<PendingOrder, ProvisioningError>;

    /// Persist the completed order over its placeholder.
    ///
    /// `NotFound` without a prior placeholder, `AlreadyExists` once completed.
    async fn complete(
        &self,
        order_id: &str,
        circuit_id: &str,
        requested_bandwidth: Bandwidth,
        operator_id: &str,
    ) -> Result<OrderRecord, ProvisioningError>;

    /// Read a completed order, with its stored bytes.
    async fn get(&self, order_id: &str) -> Result<CompletedOrder, ProvisioningError>;

    /// Bootstrap self-test: write raw `value` under `key`.
    async fn init_entry(&self, key: &str, value: &str) -> Result<(), ProvisioningError>;
}
