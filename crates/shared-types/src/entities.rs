//! # Ledger Records
//!
//! The persisted record shapes owned by the two leaf ledgers, and the codec
//! used to store them.
//!
//! Records are stored as JSON objects keyed by field name. The codec is
//! canonical: for any bytes produced by [`LedgerRecord::encode`],
//! `encode(decode(bytes)) == bytes` (field order and values preserved).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a circuit (store key in the Inventory Ledger).
pub type CircuitId = String;

/// Identifier of an order (store key in the Provisioning Ledger).
pub type OrderId = String;

/// Bandwidth amount in the circuit's native unit.
pub type Bandwidth = u64;

/// Record encode/decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Serialization failed.
    #[error("failed to encode {record}: {message}")]
    Encode {
        record: &'static str,
        message: String,
    },

    /// Bytes did not decode into the expected record.
    #[error("failed to decode {record}: {message}")]
    Decode {
        record: &'static str,
        message: String,
    },
}

/// A record that can be written to and read from a ledger store.
pub trait LedgerRecord: Serialize + DeserializeOwned {
    /// Record name used in codec errors.
    const RECORD: &'static str;

    /// Store key of this record.
    fn key(&self) -> &str;

    /// Encode to the canonical stored form.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(|e| CodecError::Encode {
            record: Self::RECORD,
            message: e.to_string(),
        })
    }

    /// Decode from stored bytes.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            record: Self::RECORD,
            message: e.to_string(),
        })
    }
}

// =============================================================================
// INVENTORY LEDGER
// =============================================================================

/// A circuit and its capacity ledger.
///
/// Invariant: `allocated_bandwidth + unallocated_bandwidth == total_bandwidth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CircuitRecord {
    pub circuit_id: CircuitId,
    pub network: String,
    pub provider_id: String,
    pub configured: bool,
    pub total_bandwidth: Bandwidth,
    pub allocated_bandwidth: Bandwidth,
    pub unallocated_bandwidth: Bandwidth,
    pub created_at: String,
}

impl CircuitRecord {
    /// A freshly created, fully unallocated circuit.
    pub fn new(
        circuit_id: impl Into<CircuitId>,
        network: impl Into<String>,
        provider_id: impl Into<String>,
        total_bandwidth: Bandwidth,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            circuit_id: circuit_id.into(),
            network: network.into(),
            provider_id: provider_id.into(),
            configured: false,
            total_bandwidth,
            allocated_bandwidth: 0,
            unallocated_bandwidth: total_bandwidth,
            created_at: created_at.into(),
        }
    }

    /// True when the capacity ledger balances.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.allocated_bandwidth.checked_add(self.unallocated_bandwidth)
            == Some(self.total_bandwidth)
    }
}

impl LedgerRecord for CircuitRecord {
    const RECORD: &'static str = "CircuitRecord";

    fn key(&self) -> &str {
        &self.circuit_id
    }
}

/// One row of a selector query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord<T> {
    pub key: String,
    pub record: T,
}

// =============================================================================
// PROVISIONING LEDGER
// =============================================================================

/// A completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub circuit_id: CircuitId,
    pub requested_bandwidth: Bandwidth,
    pub operator_id: String,
    /// Completion flag; always `true` for stored orders.
    pub status: bool,
    pub created_at: String,
}

impl OrderRecord {
    /// A completed order stamped at `created_at`.
    pub fn completed(
        order_id: impl Into<OrderId>,
        circuit_id: impl Into<CircuitId>,
        requested_bandwidth: Bandwidth,
        operator_id: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            circuit_id: circuit_id.into(),
            requested_bandwidth,
            operator_id: operator_id.into(),
            status: true,
            created_at: created_at.into(),
        }
    }
}

impl LedgerRecord for OrderRecord {
    const RECORD: &'static str = "OrderRecord";

    fn key(&self) -> &str {
        &self.order_id
    }
}

/// Placeholder establishing an order key before completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PendingOrder {
    pub order_id: OrderId,
    pub pending: bool,
    pub opened_at: String,
}

impl PendingOrder {
    pub fn new(order_id: impl Into<OrderId>, opened_at: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            pending: true,
            opened_at: opened_at.into(),
        }
    }
}

impl LedgerRecord for PendingOrder {
    const RECORD: &'static str = "PendingOrder";

    fn key(&self) -> &str {
        &self.order_id
    }
}

/// What the Provisioning Ledger finds under an order key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSlot {
    /// Nothing stored.
    Vacant,
    /// A placeholder or other bootstrap bytes; completion may proceed.
    Reserved(Vec<u8>),
    /// A completed order, with its stored bytes.
    Completed(OrderRecord, Vec<u8>),
}

impl OrderSlot {
    /// Classify raw store contents.
    #[must_use]
    pub fn classify(stored: Option<Vec<u8>>) -> Self {
        match stored {
            None => Self::Vacant,
            Some(bytes) => match OrderRecord::decode(&bytes) {
                Ok(record) if record.status => Self::Completed(record, bytes),
                _ => Self::Reserved(bytes),
            },
        }
    }
}
