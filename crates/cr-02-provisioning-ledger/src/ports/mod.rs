//! Ports module for the Provisioning Ledger

pub mod inbound;
pub mod outbound;

pub use inbound::ProvisioningLedgerApi;
pub use outbound::{LedgerStore, TimeSource};
