//! Application layer for the Provisioning Ledger

pub mod service;

pub use service::ProvisioningLedgerService;
