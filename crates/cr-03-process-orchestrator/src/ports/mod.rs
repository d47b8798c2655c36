//! Ports module for the Process Orchestrator

pub mod inbound;
pub mod outbound;

pub use inbound::ProcessOrchestratorApi;
pub use outbound::{InventoryGateway, ProvisioningGateway};
