//! Process Orchestrator Service
//!
//! Runs the admission saga:
//! 1. Validate the request is addressed to this orchestrator
//! 2. Query `checkCapacity` on the inventory ledger
//! 3. Decide `requested <= unallocated` against the observed record
//! 4. Reserve with `allocate` (only in [`AdmissionMode::ReserveOnAdmit`])
//! 5. Commit on the provisioning ledger (`openOrder` per policy, then `complete`)
//!
//! Steps are forward-only. A commit failure after a reservation leaves the
//! capacity allocated.

use crate::config::{AdmissionMode, OrchestratorConfig, PlaceholderPolicy};
use crate::domain::admission::{
    decide, read_capacity, AdmissionReceipt, AdmissionRequest, AdmissionStep,
};
use crate::domain::errors::OrchestratorError;
use crate::ports::inbound::ProcessOrchestratorApi;
use crate::ports::outbound::{InventoryGateway, ProvisioningGateway};
use async_trait::async_trait;
use shared_types::ErrorKind;
use tracing::{debug, info, warn};

/// Process Orchestrator Service
pub struct ProcessOrchestratorService<I, P> {
    /// Endpoint name this orchestrator is served under
    name: String,
    config: OrchestratorConfig,
    inventory: I,
    provisioning: P,
}

impl<I: InventoryGateway, P: ProvisioningGateway> ProcessOrchestratorService<I, P> {
    pub fn new(
        name: impl Into<String>,
        config: OrchestratorConfig,
        inventory: I,
        provisioning: P,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            inventory,
            provisioning,
        }
    }

    /// Endpoint name this orchestrator answers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Active configuration.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn provisioning(&self) -> &P {
        &self.provisioning
    }

    async fn reserve(&self, request: &AdmissionRequest) -> Result<(), OrchestratorError> {
        self.inventory
            .allocate(
                &request.inventory_id,
                &request.circuit_id,
                request.requested_bandwidth,
            )
            .await
            .map_err(|failure| match failure.kind {
                ErrorKind::CapacityExceeded => OrchestratorError::ReservationRejected {
                    circuit_id: request.circuit_id.clone(),
                    reason: failure.message,
                },
                _ => OrchestratorError::upstream(&request.inventory_id, "allocate", &failure),
            })
    }

    async fn commit(&self, request: &AdmissionRequest) -> Result<(), OrchestratorError> {
        if self.config.placeholder_policy == PlaceholderPolicy::OpenOnCommit {
            self.provisioning
                .open_order(&request.provisioning_id, &request.order_id)
                .await
                .map_err(|f| OrchestratorError::commit(&request.order_id, "openOrder", &f))?;
        }

        self.provisioning
            .complete(
                &request.provisioning_id,
                &request.order_id,
                &request.circuit_id,
                request.requested_bandwidth,
                &request.operator_id,
            )
            .await
            .map_err(|f| OrchestratorError::commit(&request.order_id, "complete", &f))
    }
}

#[async_trait]
impl<I, P> ProcessOrchestratorApi for ProcessOrchestratorService<I, P>
where
    I: InventoryGateway + 'static,
    P: ProvisioningGateway + 'static,
{
    async fn admit(
        &self,
        request: AdmissionRequest,
    ) -> Result<AdmissionReceipt, OrchestratorError> {
        // 1. Validate
        if request.orchestrator_id != self.name {
            warn!(
                step = ?AdmissionStep::Validate,
                requested = %request.orchestrator_id,
                "[cr-03] Request addressed to another orchestrator"
            );
            return Err(OrchestratorError::WrongOrchestrator {
                requested: request.orchestrator_id,
                actual: self.name.clone(),
            });
        }

        info!(
            order_id = %request.order_id,
            circuit_id = %request.circuit_id,
            requested = request.requested_bandwidth,
            mode = %self.config.admission_mode,
            "[cr-03] Admitting order"
        );

        // 2. Query
        let payload = self
            .inventory
            .check_capacity(&request.inventory_id, &request.circuit_id)
            .await
            .map_err(|failure| {
                warn!(step = ?AdmissionStep::Query, "[cr-03] Capacity query failed: {}", failure);
                OrchestratorError::upstream(&request.inventory_id, "checkCapacity", &failure)
            })?;
        let record = read_capacity(&request.inventory_id, payload)?;
        debug!(
            step = ?AdmissionStep::Query,
            unallocated = record.unallocated_bandwidth,
            "[cr-03] Capacity observed"
        );

        // 3. Decide
        if let Err(e) = decide(&record, request.requested_bandwidth) {
            info!(step = ?AdmissionStep::Decide, order_id = %request.order_id, "[cr-03] Rejected: {}", e);
            return Err(e);
        }

        // 4. Reserve
        let reserved = match self.config.admission_mode {
            AdmissionMode::CheckOnly => false,
            AdmissionMode::ReserveOnAdmit => {
                if let Err(e) = self.reserve(&request).await {
                    warn!(step = ?AdmissionStep::Reserve, order_id = %request.order_id, "[cr-03] Reservation failed: {}", e);
                    return Err(e);
                }
                true
            }
        };

        // 5. Commit
        if let Err(e) = self.commit(&request).await {
            warn!(
                step = ?AdmissionStep::Commit,
                order_id = %request.order_id,
                reserved,
                "[cr-03] Commit failed, nothing compensated: {}",
                e
            );
            return Err(e);
        }

        info!(
            order_id = %request.order_id,
            circuit_id = %request.circuit_id,
            reserved,
            "[cr-03] Order admitted"
        );

        Ok(AdmissionReceipt {
            order_id: request.order_id,
            observed_unallocated: record.unallocated_bandwidth,
            reserved,
        })
    }
}
