//! Application layer for the Inventory Ledger

pub mod service;

pub use service::InventoryLedgerService;
