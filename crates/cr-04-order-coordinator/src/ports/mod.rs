//! Ports module for the Order Coordinator

pub mod inbound;
pub mod outbound;

pub use inbound::OrderCoordinatorApi;
pub use outbound::{OrchestratorGateway, ProvisioningReader};
