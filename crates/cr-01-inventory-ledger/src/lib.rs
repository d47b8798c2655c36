//! # CR-01: Inventory Ledger
//!
//! Owns circuit records and their bandwidth capacity ledger. The only
//! component that mutates a circuit's unallocated bandwidth.
//!
//! ## Architecture
//!
//! - **Domain**: Capacity rules (`apply_allocation`), errors, invariants
//! - **Ports**: Inbound (`InventoryLedgerApi`) and Outbound (`LedgerStore`, `TimeSource`)
//! - **Application**: `InventoryLedgerService`
//! - **IPC**: `InventoryLedgerHandler` serving the string-argument bus surface
//!
//! ## Invariant
//!
//! `allocatedBandwidth + unallocatedBandwidth == totalBandwidth` after every
//! successful `createCircuit` or `allocate`.

pub mod application;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use application::service::InventoryLedgerService;
pub use domain::errors::InventoryError;
pub use ipc::{InventoryLedgerHandler, SERVICE_TAG};
pub use ports::inbound::InventoryLedgerApi;
