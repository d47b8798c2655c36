//! Adapters for the Order Coordinator

pub mod bus;

pub use bus::{BusOrchestratorGateway, BusProvisioningReader};
