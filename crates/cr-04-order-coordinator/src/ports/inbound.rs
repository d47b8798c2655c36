//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::CoordinatorError;
use crate::domain::submission::Submission;
use async_trait::async_trait;

/// Primary Order Coordinator API
#[async_trait]
pub trait OrderCoordinatorApi: Send + Sync {
    /// Forward a submission for admission. Success carries no payload;
    /// the caller reads the outcome back with [`Self::get_order`].
    async fn submit(&self, submission: Submission) -> Result<(), CoordinatorError>;

    /// Raw order record bytes as stored by the provisioning ledger.
    async fn get_order(
        &self,
        provisioning_id: &str,
        order_id: &str,
    ) -> Result<Vec<u8>, CoordinatorError>;
}
