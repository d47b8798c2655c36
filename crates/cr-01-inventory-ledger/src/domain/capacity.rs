//! Capacity rules
//!
//! Pure functions over [`CircuitRecord`]; the service owns all store access.

use super::errors::InventoryError;
use super::invariants::{
    invariant_balanced, invariant_identity_preserved, invariant_no_over_allocation,
};
use shared_types::{Bandwidth, CircuitRecord};

/// Compute the record after allocating `amount`.
///
/// All-or-nothing: a request above the unallocated bandwidth is rejected and
/// no partial allocation is produced.
pub fn apply_allocation(
    record: &CircuitRecord,
    amount: Bandwidth,
) -> Result<CircuitRecord, InventoryError> {
    if !invariant_balanced(record) {
        return Err(InventoryError::Corrupt {
            circuit_id: record.circuit_id.clone(),
            reason: format!(
                "allocated {} + unallocated {} != total {}",
                record.allocated_bandwidth,
                record.unallocated_bandwidth,
                record.total_bandwidth
            ),
        });
    }

    if !invariant_no_over_allocation(record, amount) {
        return Err(InventoryError::CapacityExceeded {
            circuit_id: record.circuit_id.clone(),
            requested: amount,
            unallocated: record.unallocated_bandwidth,
        });
    }

    // Cannot overflow: the record is balanced and amount <= unallocated
    let mut next = record.clone();
    next.allocated_bandwidth += amount;
    next.unallocated_bandwidth -= amount;

    debug_assert!(invariant_balanced(&next));
    debug_assert!(invariant_identity_preserved(record, &next));
    Ok(next)
}
