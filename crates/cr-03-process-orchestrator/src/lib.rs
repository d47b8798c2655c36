//! # CR-03: Process Orchestrator
//!
//! Admission control for provisioning requests. Queries the Inventory
//! Ledger for the circuit's capacity, decides against the observed
//! unallocated bandwidth and commits the order on the Provisioning Ledger.
//!
//! Holds no ledger state of its own. In [`AdmissionMode::CheckOnly`] the
//! query and the commit are separate calls, so two admissions against the
//! same circuit can both pass against the same observation.
//!
//! ## Architecture
//!
//! - **Domain**: Admission request, decision and errors
//! - **Ports**: Inbound (`ProcessOrchestratorApi`) and Outbound
//!   (`InventoryGateway`, `ProvisioningGateway`)
//! - **Application**: `ProcessOrchestratorService`
//! - **Adapters**: Bus-backed gateways
//! - **IPC**: `ProcessOrchestratorHandler`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{BusInventoryGateway, BusProvisioningGateway};
pub use application::service::ProcessOrchestratorService;
pub use config::{AdmissionMode, OrchestratorConfig, ParseSettingError, PlaceholderPolicy};
pub use domain::admission::{AdmissionReceipt, AdmissionRequest};
pub use domain::errors::OrchestratorError;
pub use ipc::{ProcessOrchestratorHandler, SERVICE_TAG};
pub use ports::inbound::ProcessOrchestratorApi;
