//! Error types for the Provisioning Ledger

use shared_types::{ArgumentError, CallFailure, CodecError, ErrorKind, StoreError};
use thiserror::Error;

/// All errors that can occur in the Provisioning Ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisioningError {
    /// Arity, emptiness or numeric parse failure
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// The order key is already taken (placeholder or completed order)
    #[error("order {order_id} already exists")]
    AlreadyExists { order_id: String },

    /// Nothing is stored under the order key
    #[error("order {order_id} does not exist")]
    NotFound { order_id: String },

    /// The key exists but holds no completed order
    #[error("order {order_id} exists but is not a completed order")]
    NotCompleted { order_id: String },

    /// A record could not be encoded
    #[error("order {order_id} could not be stored: {reason}")]
    Corrupt { order_id: String, reason: String },

    /// The store itself failed
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl ProvisioningError {
    /// Wire error kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } | Self::NotCompleted { .. } => ErrorKind::NotFound,
            Self::Corrupt { .. } | Self::Storage(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn corrupt(order_id: &str, err: CodecError) -> Self {
        Self::Corrupt {
            order_id: order_id.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<ProvisioningError> for CallFailure {
    fn from(err: ProvisioningError) -> Self {
        CallFailure::new(err.kind(), err.to_string())
    }
}
