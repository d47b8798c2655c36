//! Order lifecycle
//!
//! ```text
//!   Vacant ──openOrder/init──► Reserved ──complete──► Completed
//! ```
//!
//! `Completed` is terminal: a completed order is never overwritten.

use super::errors::ProvisioningError;
use shared_types::{OrderRecord, OrderSlot};

/// `openOrder` is only allowed on a vacant key.
pub fn check_open(slot: &OrderSlot, order_id: &str) -> Result<(), ProvisioningError> {
    match slot {
        OrderSlot::Vacant => Ok(()),
        OrderSlot::Reserved(_) | OrderSlot::Completed(..) => {
            Err(ProvisioningError::AlreadyExists {
                order_id: order_id.to_string(),
            })
        }
    }
}

/// `complete` requires an established, not yet completed key.
pub fn check_complete(slot: &OrderSlot, order_id: &str) -> Result<(), ProvisioningError> {
    match slot {
        OrderSlot::Reserved(_) => Ok(()),
        OrderSlot::Vacant => Err(ProvisioningError::NotFound {
            order_id: order_id.to_string(),
        }),
        OrderSlot::Completed(..) => Err(ProvisioningError::AlreadyExists {
            order_id: order_id.to_string(),
        }),
    }
}

/// A completed order with the exact bytes it is stored as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOrder {
    pub record: OrderRecord,
    pub bytes: Vec<u8>,
}

/// `get` returns only completed orders.
pub fn readable(slot: OrderSlot, order_id: &str) -> Result<CompletedOrder, ProvisioningError> {
    match slot {
        OrderSlot::Completed(record, bytes) => Ok(CompletedOrder { record, bytes }),
        OrderSlot::Vacant => Err(ProvisioningError::NotFound {
            order_id: order_id.to_string(),
        }),
        OrderSlot::Reserved(_) => Err(ProvisioningError::NotCompleted {
            order_id: order_id.to_string(),
        }),
    }
}
