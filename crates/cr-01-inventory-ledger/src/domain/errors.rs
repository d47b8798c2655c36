//! Error types for the Inventory Ledger

use shared_types::{ArgumentError, Bandwidth, CallFailure, CodecError, ErrorKind, StoreError};
use thiserror::Error;

/// All errors that can occur in the Inventory Ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Arity, emptiness or numeric parse failure
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// A circuit with this id already exists
    #[error("circuit {circuit_id} already exists")]
    AlreadyExists { circuit_id: String },

    /// No circuit with this id
    #[error("circuit {circuit_id} does not exist")]
    NotFound { circuit_id: String },

    /// The request exceeds the circuit's unallocated bandwidth
    #[error(
        "circuit {circuit_id}: requested {requested} exceeds unallocated bandwidth {unallocated}"
    )]
    CapacityExceeded {
        circuit_id: String,
        requested: Bandwidth,
        unallocated: Bandwidth,
    },

    /// Stored bytes are not a valid, balanced circuit record
    #[error("circuit {circuit_id} is corrupt: {reason}")]
    Corrupt { circuit_id: String, reason: String },

    /// The store itself failed
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl InventoryError {
    /// Wire error kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::Corrupt { .. } | Self::Storage(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn corrupt(circuit_id: &str, err: CodecError) -> Self {
        Self::Corrupt {
            circuit_id: circuit_id.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<InventoryError> for CallFailure {
    fn from(err: InventoryError) -> Self {
        CallFailure::new(err.kind(), err.to_string())
    }
}
