//! Inventory Ledger Service
//!
//! Main service implementing [`InventoryLedgerApi`] over a [`LedgerStore`].
//!
//! `allocate` is a read followed by a write on the same key with no lock
//! held in between. Two concurrent allocations on one circuit may both read
//! the same record, and the later write wins.

use crate::domain::capacity::apply_allocation;
use crate::domain::errors::InventoryError;
use crate::ports::inbound::InventoryLedgerApi;
use crate::ports::outbound::{LedgerStore, TimeSource};
use async_trait::async_trait;
use shared_types::{Bandwidth, CircuitRecord, LedgerRecord, QueryRecord, Selector};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Inventory Ledger Service
pub struct InventoryLedgerService<S: LedgerStore, C: TimeSource> {
    store: Arc<S>,
    clock: C,
}

impl<S: LedgerStore, C: TimeSource> InventoryLedgerService<S, C> {
    pub fn new(store: Arc<S>, clock: C) -> Self {
        Self { store, clock }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn load(&self, circuit_id: &str) -> Result<CircuitRecord, InventoryError> {
        let bytes = self
            .store
            .get(circuit_id)?
            .ok_or_else(|| InventoryError::NotFound {
                circuit_id: circuit_id.to_string(),
            })?;
        CircuitRecord::decode(&bytes).map_err(|e| InventoryError::corrupt(circuit_id, e))
    }

    fn save(&self, record: &CircuitRecord) -> Result<(), InventoryError> {
        let bytes = record
            .encode()
            .map_err(|e| InventoryError::corrupt(record.key(), e))?;
        self.store.put(record.key(), bytes)?;
        Ok(())
    }
}

#[async_trait]
impl<S, C> InventoryLedgerApi for InventoryLedgerService<S, C>
where
    S: LedgerStore + 'static,
    C: TimeSource + 'static,
{
    async fn create_circuit(
        &self,
        circuit_id: &str,
        network: &str,
        provider_id: &str,
        total_bandwidth: Bandwidth,
    ) -> Result<CircuitRecord, InventoryError> {
        if self.store.get(circuit_id)?.is_some() {
            warn!(circuit_id, "[cr-01] Circuit already exists");
            return Err(InventoryError::AlreadyExists {
                circuit_id: circuit_id.to_string(),
            });
        }

        let record = CircuitRecord::new(
            circuit_id,
            network,
            provider_id,
            total_bandwidth,
            self.clock.timestamp(),
        );
        self.save(&record)?;

        info!(
            circuit_id,
            network,
            total_bandwidth,
            "[cr-01] Circuit created"
        );
        Ok(record)
    }

    async fn allocate(
        &self,
        circuit_id: &str,
        amount: Bandwidth,
    ) -> Result<CircuitRecord, InventoryError> {
        let current = self.load(circuit_id)?;

        let next = match apply_allocation(&current, amount) {
            Ok(next) => next,
            Err(e) => {
                warn!(
                    circuit_id,
                    amount,
                    unallocated = current.unallocated_bandwidth,
                    "[cr-01] Allocation rejected: {}",
                    e
                );
                return Err(e);
            }
        };

        self.save(&next)?;

        info!(
            circuit_id,
            amount,
            allocated = next.allocated_bandwidth,
            unallocated = next.unallocated_bandwidth,
            "[cr-01] Bandwidth allocated"
        );
        Ok(next)
    }

    async fn check_capacity(&self, circuit_id: &str) -> Result<CircuitRecord, InventoryError> {
        let record = self.load(circuit_id)?;
        debug!(
            circuit_id,
            unallocated = record.unallocated_bandwidth,
            "[cr-01] Capacity checked"
        );
        Ok(record)
    }

    async fn query_by_circuit_id(
        &self,
        circuit_id: &str,
    ) -> Result<Vec<QueryRecord<CircuitRecord>>, InventoryError> {
        let selector = Selector::field_eq("circuitId", circuit_id);
        let rows = self
            .store
            .query_by_selector(&selector)?
            .into_iter()
            .map(|entry| {
                CircuitRecord::decode(&entry.value)
                    .map(|record| QueryRecord {
                        key: entry.key.clone(),
                        record,
                    })
                    .map_err(|e| InventoryError::corrupt(&entry.key, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(circuit_id, rows = rows.len(), "[cr-01] Query complete");
        Ok(rows)
    }

    async fn init_entry(&self, key: &str, value: &str) -> Result<(), InventoryError> {
        self.store.put(key, value.as_bytes().to_vec())?;
        info!(key, "[cr-01] Init entry written");
        Ok(())
    }
}
