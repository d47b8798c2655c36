//! Inbound Ports (Driving Ports / API)

use crate::domain::admission::{AdmissionReceipt, AdmissionRequest};
use crate::domain::errors::OrchestratorError;
use async_trait::async_trait;

/// Primary Process Orchestrator API
#[async_trait]
pub trait ProcessOrchestratorApi: Send + Sync {
    /// Run the admission saga for one request.
    ///
    /// Terminal on the first failure; no step is compensated.
    async fn admit(&self, request: AdmissionRequest)
        -> Result<AdmissionReceipt, OrchestratorError>;
}
