//! Ports module for the Inventory Ledger
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::InventoryLedgerApi;
pub use outbound::{LedgerStore, TimeSource};
