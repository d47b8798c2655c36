//! Admission request and decision
//!
//! ```text
//! Validate ──► Query ──► Decide ──► [Reserve] ──► Commit ──► Admitted
//!    │           │          │           │            │
//!    ▼           ▼          ▼           ▼            ▼
//! Invalid    Upstream   Capacity    Capacity /    Commit
//! Argument   Unavailable Exceeded   Upstream      Failed
//! ```
//!
//! The decision compares against the value observed by the query and is
//! not re-checked at commit time.

use super::errors::OrchestratorError;
use shared_types::{Bandwidth, CircuitRecord, LedgerRecord};

/// One validated admission request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRequest {
    /// Endpoint name the caller addressed
    pub orchestrator_id: String,
    /// Inventory Ledger endpoint name
    pub inventory_id: String,
    /// Provisioning Ledger endpoint name
    pub provisioning_id: String,
    pub circuit_id: String,
    pub requested_bandwidth: Bandwidth,
    pub order_id: String,
    pub operator_id: String,
}

/// Steps of the admission saga.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionStep {
    Validate,
    Query,
    Decide,
    Reserve,
    Commit,
}

/// Result of a successful admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionReceipt {
    pub order_id: String,
    /// Unallocated bandwidth seen by the query step
    pub observed_unallocated: Bandwidth,
    /// True when capacity was allocated before commit
    pub reserved: bool,
}

/// Decode the capacity query payload.
pub fn read_capacity(
    inventory_id: &str,
    payload: Option<Vec<u8>>,
) -> Result<CircuitRecord, OrchestratorError> {
    let malformed = |reason: String| OrchestratorError::UpstreamUnavailable {
        service: inventory_id.to_string(),
        operation: "checkCapacity",
        reason,
    };

    let bytes = payload.ok_or_else(|| malformed("empty capacity response".to_string()))?;
    let record = CircuitRecord::decode(&bytes).map_err(|e| malformed(e.to_string()))?;
    if !record.is_balanced() {
        return Err(malformed(format!(
            "circuit {} capacity does not balance",
            record.circuit_id
        )));
    }
    Ok(record)
}

/// Admit when `requested <= unallocated` as observed.
pub fn decide(record: &CircuitRecord, requested: Bandwidth) -> Result<(), OrchestratorError> {
    if requested <= record.unallocated_bandwidth {
        Ok(())
    } else {
        Err(OrchestratorError::CapacityExceeded {
            circuit_id: record.circuit_id.clone(),
            requested,
            unallocated: record.unallocated_bandwidth,
        })
    }
}
