//! Error types for the Process Orchestrator
//!
//! Every failure is terminal for its request. Nothing done by an earlier
//! step is undone.

use shared_types::{ArgumentError, Bandwidth, CallFailure, ErrorKind};
use thiserror::Error;

/// All errors that can occur during admission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    /// Arity, emptiness or numeric parse failure
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// The call named a different orchestrator endpoint
    #[error("request addressed to orchestrator '{requested}', this is '{actual}'")]
    WrongOrchestrator { requested: String, actual: String },

    /// The capacity query failed or returned an unusable record
    #[error("{service} {operation} failed: {reason}")]
    UpstreamUnavailable {
        service: String,
        operation: &'static str,
        reason: String,
    },

    /// The decision rejected the request against the observed capacity
    #[error(
        "circuit {circuit_id}: requested {requested} exceeds unallocated bandwidth {unallocated}"
    )]
    CapacityExceeded {
        circuit_id: String,
        requested: Bandwidth,
        unallocated: Bandwidth,
    },

    /// The inventory ledger refused the reservation for capacity
    #[error("reservation on circuit {circuit_id} rejected: {reason}")]
    ReservationRejected { circuit_id: String, reason: String },

    /// The decision passed but the provisioning write failed
    #[error("commit of order {order_id} failed at {operation}: {reason}")]
    CommitFailed {
        order_id: String,
        operation: &'static str,
        reason: String,
    },
}

impl OrchestratorError {
    /// Wire error kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::WrongOrchestrator { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            Self::CapacityExceeded { .. } | Self::ReservationRejected { .. } => {
                ErrorKind::CapacityExceeded
            }
            Self::CommitFailed { .. } => ErrorKind::CommitFailed,
        }
    }

    pub(crate) fn upstream(service: &str, operation: &'static str, failure: &CallFailure) -> Self {
        Self::UpstreamUnavailable {
            service: service.to_string(),
            operation,
            reason: failure.to_string(),
        }
    }

    pub(crate) fn commit(order_id: &str, operation: &'static str, failure: &CallFailure) -> Self {
        Self::CommitFailed {
            order_id: order_id.to_string(),
            operation,
            reason: failure.to_string(),
        }
    }
}

impl From<OrchestratorError> for CallFailure {
    fn from(err: OrchestratorError) -> Self {
        CallFailure::new(err.kind(), err.to_string())
    }
}
