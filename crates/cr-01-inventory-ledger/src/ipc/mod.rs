//! IPC Module for the Inventory Ledger
//!
//! ## Boundaries
//!
//! - Accept: `createCircuit`, `allocate`, `checkCapacity`, `queryByCircuitId`
//!   and the bootstrap `init`
//! - Called by: Process Orchestrator (`checkCapacity`, `allocate`), operators

pub mod handler;

pub use handler::{InventoryLedgerHandler, SERVICE_TAG};
