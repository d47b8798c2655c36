//! Provisioning Ledger Service
//!
//! Main service implementing [`ProvisioningLedgerApi`] over a [`LedgerStore`].
//!
//! Like the inventory ledger, `complete` reads the slot and then writes it
//! without holding a lock across the two steps.

use crate::domain::errors::ProvisioningError;
use crate::domain::lifecycle::{check_complete, check_open, readable, CompletedOrder};
use crate::ports::inbound::ProvisioningLedgerApi;
use crate::ports::outbound::{LedgerStore, TimeSource};
use async_trait::async_trait;
use shared_types::{Bandwidth, LedgerRecord, OrderRecord, OrderSlot, PendingOrder};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Provisioning Ledger Service
pub struct ProvisioningLedgerService<S: LedgerStore, C: TimeSource> {
    store: Arc<S>,
    clock: C,
}

impl<S: LedgerStore, C: TimeSource> ProvisioningLedgerService<S, C> {
    pub fn new(store: Arc<S>, clock: C) -> Self {
        Self { store, clock }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn slot(&self, order_id: &str) -> Result<OrderSlot, ProvisioningError> {
        Ok(OrderSlot::classify(self.store.get(order_id)?))
    }

    fn save<R: LedgerRecord>(&self, record: &R) -> Result<(), ProvisioningError> {
        let bytes = record
            .encode()
            .map_err(|e| ProvisioningError::corrupt(record.key(), e))?;
        self.store.put(record.key(), bytes)?;
        Ok(())
    }
}

#[async_trait]
impl<S, C> ProvisioningLedgerApi for ProvisioningLedgerService<S, C>
where
    S: LedgerStore + 'static,
    C: TimeSource + 'static,
{
    async fn open_order(&self, order_id: &str) -> Result<PendingOrder, ProvisioningError> {
        let slot = self.slot(order_id)?;
        if let Err(e) = check_open(&slot, order_id) {
            warn!(order_id, "[cr-02] Cannot open order: {}", e);
            return Err(e);
        }

        let pending = PendingOrder::new(order_id, self.clock.timestamp());
        self.save(&pending)?;

        info!(order_id, "[cr-02] Order opened");
        Ok(pending)
    }

    async fn complete(
        &self,
        order_id: &str,
        circuit_id: &str,
        requested_bandwidth: Bandwidth,
        operator_id: &str,
    ) -> Result<OrderRecord, ProvisioningError> {
        let slot = self.slot(order_id)?;
        if let Err(e) = check_complete(&slot, order_id) {
            warn!(order_id, "[cr-02] Cannot complete order: {}", e);
            return Err(e);
        }

        let record = OrderRecord::completed(
            order_id,
            circuit_id,
            requested_bandwidth,
            operator_id,
            self.clock.timestamp(),
        );
        self.save(&record)?;

        info!(
            order_id,
            circuit_id,
            requested_bandwidth,
            operator_id,
            "[cr-02] Order completed"
        );
        Ok(record)
    }

    async fn get(&self, order_id: &str) -> Result<CompletedOrder, ProvisioningError> {
        let order = readable(self.slot(order_id)?, order_id)?;
        debug!(order_id, "[cr-02] Order read");
        Ok(order)
    }

    async fn init_entry(&self, key: &str, value: &str) -> Result<(), ProvisioningError> {
        self.store.put(key, value.as_bytes().to_vec())?;
        info!(key, "[cr-02] Init entry written");
        Ok(())
    }
}
