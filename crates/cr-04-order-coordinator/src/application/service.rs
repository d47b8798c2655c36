//! Order Coordinator Service
//!
//! The external boundary. Holds no state; every call is forwarded once and
//! its failure returned as received.

use crate::domain::errors::CoordinatorError;
use crate::domain::submission::Submission;
use crate::ports::inbound::OrderCoordinatorApi;
use crate::ports::outbound::{OrchestratorGateway, ProvisioningReader};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Order Coordinator Service
pub struct OrderCoordinatorService<O, R> {
    orchestrator: O,
    provisioning: R,
}

impl<O: OrchestratorGateway, R: ProvisioningReader> OrderCoordinatorService<O, R> {
    pub fn new(orchestrator: O, provisioning: R) -> Self {
        Self {
            orchestrator,
            provisioning,
        }
    }

    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    pub fn provisioning(&self) -> &R {
        &self.provisioning
    }
}

#[async_trait]
impl<O, R> OrderCoordinatorApi for OrderCoordinatorService<O, R>
where
    O: OrchestratorGateway + 'static,
    R: ProvisioningReader + 'static,
{
    async fn submit(&self, submission: Submission) -> Result<(), CoordinatorError> {
        info!(
            order_id = %submission.order_id,
            circuit_id = %submission.circuit_id,
            requested = submission.requested_bandwidth,
            orchestrator = %submission.orchestrator_id,
            "[cr-04] Submitting order"
        );

        self.orchestrator
            .admit(&submission.orchestrator_id, submission.admit_args())
            .await
            .map_err(|failure| {
                warn!(order_id = %submission.order_id, "[cr-04] Submission failed: {}", failure);
                CoordinatorError::Downstream(failure)
            })?;

        info!(order_id = %submission.order_id, "[cr-04] Submission accepted");
        Ok(())
    }

    async fn get_order(
        &self,
        provisioning_id: &str,
        order_id: &str,
    ) -> Result<Vec<u8>, CoordinatorError> {
        let payload = self
            .provisioning
            .get(provisioning_id, order_id)
            .await
            .map_err(|failure| {
                debug!(order_id, "[cr-04] Order read failed: {}", failure);
                CoordinatorError::Downstream(failure)
            })?;

        payload.ok_or_else(|| CoordinatorError::EmptyRecord {
            service: provisioning_id.to_string(),
            order_id: order_id.to_string(),
        })
    }
}
