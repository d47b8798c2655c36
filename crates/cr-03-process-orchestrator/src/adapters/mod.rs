//! Adapters for the Process Orchestrator
//!
//! Bus-backed implementations of the outbound gateways.

pub mod bus;

pub use bus::{BusInventoryGateway, BusProvisioningGateway};
