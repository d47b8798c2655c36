//! # CR-04: Order Coordinator
//!
//! The external entry point. `submit` forwards a request to the Process
//! Orchestrator; `getOrder` reads the resulting order back from the
//! Provisioning Ledger. Failures from either are returned unchanged.
//!
//! ## Architecture
//!
//! - **Domain**: `Submission` and errors
//! - **Ports**: Inbound (`OrderCoordinatorApi`) and Outbound
//!   (`OrchestratorGateway`, `ProvisioningReader`)
//! - **Application**: `OrderCoordinatorService`
//! - **Adapters**: Bus-backed gateways
//! - **IPC**: `OrderCoordinatorHandler`

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{BusOrchestratorGateway, BusProvisioningReader};
pub use application::service::OrderCoordinatorService;
pub use domain::errors::CoordinatorError;
pub use domain::submission::Submission;
pub use ipc::{OrderCoordinatorHandler, SERVICE_TAG};
pub use ports::inbound::OrderCoordinatorApi;
