//! IPC Module for the Provisioning Ledger
//!
//! ## Boundaries
//!
//! - Accept: `openOrder`, `complete`, `get` and the bootstrap `init`
//! - Called by: Process Orchestrator (`openOrder`, `complete`),
//!   Order Coordinator (`get`)

pub mod handler;

pub use handler::{ProvisioningLedgerHandler, SERVICE_TAG};
