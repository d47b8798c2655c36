//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::InventoryError;
use async_trait::async_trait;
use shared_types::{Bandwidth, CircuitRecord, QueryRecord};

/// Primary Inventory Ledger API
///
/// The only component that mutates a circuit's unallocated bandwidth.
#[async_trait]
pub trait InventoryLedgerApi: Send + Sync {
    /// Persist a new, fully unallocated circuit.
    ///
    /// Fails with `AlreadyExists` if the key is present; never overwrites.
    async fn create_circuit(
        &self,
        circuit_id: &str,
        network: &str,
        provider_id: &str,
        total_bandwidth: Bandwidth,
    ) -> Result<CircuitRecord, InventoryError>;

    /// Move `amount` from unallocated to allocated bandwidth.
    ///
    /// The record is unchanged on failure. There is no release path.
    async fn allocate(&self, circuit_id: &str, amount: Bandwidth)
        -> Result<CircuitRecord, InventoryError>;

    /// Read the current record.
    ///
    /// The result is a point-in-time view; concurrent allocations may
    /// change it immediately after this returns.
    async fn check_capacity(&self, circuit_id: &str) -> Result<CircuitRecord, InventoryError>;

    /// Selector query on `circuitId` (0 or 1 rows).
    async fn query_by_circuit_id(
        &self,
        circuit_id: &str,
    ) -> Result<Vec<QueryRecord<CircuitRecord>>, InventoryError>;

    /// Bootstrap self-test: write raw `value` under `key`.
    async fn init_entry(&self, key: &str, value: &str) -> Result<(), InventoryError>;
}
