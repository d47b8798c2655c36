//! Domain module for the Inventory Ledger
//!
//! Pure capacity rules, their errors and the ledger invariants.

pub mod capacity;
pub mod errors;
pub mod invariants;

pub use capacity::*;
pub use errors::*;
pub use invariants::*;
