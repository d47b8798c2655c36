//! Domain invariants for the Inventory Ledger

use shared_types::{Bandwidth, CircuitRecord};

/// INVARIANT-1: Balanced Ledger
/// `allocatedBandwidth + unallocatedBandwidth == totalBandwidth`, without overflow.
pub fn invariant_balanced(record: &CircuitRecord) -> bool {
    record.is_balanced()
}

/// INVARIANT-2: No Over-Allocation
/// An allocation never takes more than was unallocated before it.
pub fn invariant_no_over_allocation(before: &CircuitRecord, amount: Bandwidth) -> bool {
    amount <= before.unallocated_bandwidth
}

/// INVARIANT-3: Immutable Identity
/// Allocation changes only the two bandwidth counters.
pub fn invariant_identity_preserved(before: &CircuitRecord, after: &CircuitRecord) -> bool {
    before.circuit_id == after.circuit_id
        && before.network == after.network
        && before.provider_id == after.provider_id
        && before.configured == after.configured
        && before.total_bandwidth == after.total_bandwidth
        && before.created_at == after.created_at
}
