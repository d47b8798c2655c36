//! Error types for the Order Coordinator
//!
//! Downstream failures pass through with their kind and message intact.

use shared_types::{ArgumentError, CallFailure, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// Arity, emptiness or numeric parse failure at the boundary
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// The orchestrator or provisioning ledger answered with a failure
    #[error("{0}")]
    Downstream(CallFailure),

    /// `get` succeeded without returning the record
    #[error("{service} returned no record for order {order_id}")]
    EmptyRecord { service: String, order_id: String },
}

impl CoordinatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Downstream(failure) => failure.kind,
            Self::EmptyRecord { .. } => ErrorKind::UpstreamUnavailable,
        }
    }
}

impl From<CoordinatorError> for CallFailure {
    fn from(err: CoordinatorError) -> Self {
        match err {
            CoordinatorError::Downstream(failure) => failure,
            other => CallFailure::new(other.kind(), other.to_string()),
        }
    }
}
