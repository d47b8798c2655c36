//! # CR-02: Provisioning Ledger
//!
//! Owns order records. The only writer of completed-order state.
//!
//! An order key is first established by a pending placeholder
//! (`openOrder`, or bootstrap bytes written by `init`); `complete` then
//! replaces the placeholder with the final `OrderRecord`. A completed order
//! is never overwritten.
//!
//! ## Architecture
//!
//! - **Domain**: Order lifecycle rules and errors
//! - **Ports**: Inbound (`ProvisioningLedgerApi`) and Outbound (`LedgerStore`, `TimeSource`)
//! - **Application**: `ProvisioningLedgerService`
//! - **IPC**: `ProvisioningLedgerHandler`

pub mod application;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use application::service::ProvisioningLedgerService;
pub use domain::errors::ProvisioningError;
pub use domain::lifecycle::CompletedOrder;
pub use ipc::{ProvisioningLedgerHandler, SERVICE_TAG};
pub use ports::inbound::ProvisioningLedgerApi;
