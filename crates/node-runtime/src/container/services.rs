//! # Service Container
//!
//! Builds the four services with their stores and bus gateways.
//!
//! ```text
//! Level 0: Inventory Ledger, Provisioning Ledger (own stores)
//! Level 1: Process Orchestrator (gateways to Level 0)
//! Level 2: Order Coordinator (gateways to Level 1 and Provisioning)
//! ```
//!
//! Each service owns its own `InMemoryLedgerStore`. Services never touch
//! each other's stores; every cross-service call goes over the bus.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use cr_01_inventory_ledger::{InventoryLedgerHandler, InventoryLedgerService};
use cr_02_provisioning_ledger::{ProvisioningLedgerHandler, ProvisioningLedgerService};
use cr_03_process_orchestrator::{
    BusInventoryGateway, BusProvisioningGateway, ProcessOrchestratorHandler,
    ProcessOrchestratorService,
};
use cr_04_order_coordinator::{
    BusOrchestratorGateway, BusProvisioningReader, OrderCoordinatorHandler,
    OrderCoordinatorService,
};
use shared_bus::{InMemoryEventBus, ServiceClient, ServiceEndpoint};
use shared_types::{InMemoryLedgerStore, OperationTableError, SystemTimeSource};

use crate::container::config::{ConfigError, NodeConfig};
use crate::registry::ServiceId;

/// Concrete Inventory Ledger endpoint.
pub type InventoryEndpoint =
    InventoryLedgerHandler<InventoryLedgerService<InMemoryLedgerStore, SystemTimeSource>>;

/// Concrete Provisioning Ledger endpoint.
pub type ProvisioningEndpoint =
    ProvisioningLedgerHandler<ProvisioningLedgerService<InMemoryLedgerStore, SystemTimeSource>>;

/// Concrete Process Orchestrator endpoint.
pub type OrchestratorEndpoint = ProcessOrchestratorHandler<
    ProcessOrchestratorService<BusInventoryGateway, BusProvisioningGateway>,
    InMemoryLedgerStore,
>;

/// Concrete Order Coordinator endpoint.
pub type CoordinatorEndpoint = OrderCoordinatorHandler<
    OrderCoordinatorService<BusOrchestratorGateway, BusProvisioningReader>,
    InMemoryLedgerStore,
>;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("operation table rejected: {0}")]
    Operations(#[from] OperationTableError),
}

/// Per-service stores.
pub struct ServiceStores {
    pub inventory: Arc<InMemoryLedgerStore>,
    pub provisioning: Arc<InMemoryLedgerStore>,
    pub orchestrator: Arc<InMemoryLedgerStore>,
    pub coordinator: Arc<InMemoryLedgerStore>,
}

impl ServiceStores {
    fn new() -> Self {
        Self {
            inventory: Arc::new(InMemoryLedgerStore::new()),
            provisioning: Arc::new(InMemoryLedgerStore::new()),
            orchestrator: Arc::new(InMemoryLedgerStore::new()),
            coordinator: Arc::new(InMemoryLedgerStore::new()),
        }
    }
}

/// Central container holding all service instances.
pub struct ServiceContainer {
    pub inventory: Arc<InventoryEndpoint>,
    pub provisioning: Arc<ProvisioningEndpoint>,
    pub orchestrator: Arc<OrchestratorEndpoint>,
    pub coordinator: Arc<CoordinatorEndpoint>,

    /// Stores backing each service.
    pub stores: ServiceStores,

    /// Bus carrying every cross-service call.
    pub event_bus: Arc<InMemoryEventBus>,

    /// Node configuration (immutable after initialization).
    pub config: NodeConfig,
}

impl ServiceContainer {
    /// Build every service from `config`.
    #[instrument(name = "service_init", skip(config))]
    pub fn new(config: NodeConfig) -> Result<Self, ContainerError> {
        config.validate()?;
        info!("Initializing Circuit-Reserve service container");

        let event_bus = Arc::new(InMemoryEventBus::with_capacity(config.bus.capacity));
        let stores = ServiceStores::new();
        let endpoints = &config.endpoints;

        info!("Level 0: ledgers");
        let inventory = Arc::new(InventoryLedgerHandler::new(InventoryLedgerService::new(
            Arc::clone(&stores.inventory),
            SystemTimeSource,
        ))?);
        let provisioning = Arc::new(ProvisioningLedgerHandler::new(
            ProvisioningLedgerService::new(Arc::clone(&stores.provisioning), SystemTimeSource),
        )?);

        info!(
            mode = %config.orchestrator.admission_mode,
            policy = %config.orchestrator.placeholder_policy,
            "Level 1: process orchestrator"
        );
        let orchestrator_client = ServiceClient::new(Arc::clone(&event_bus), &endpoints.orchestrator)
            .with_timeout(config.bus.call_timeout());
        let orchestrator = Arc::new(ProcessOrchestratorHandler::new(
            ProcessOrchestratorService::new(
                endpoints.orchestrator.clone(),
                config.orchestrator.clone(),
                BusInventoryGateway::new(orchestrator_client.clone()),
                BusProvisioningGateway::new(orchestrator_client),
            ),
            Arc::clone(&stores.orchestrator),
        )?);

        info!("Level 2: order coordinator");
        let coordinator_client = ServiceClient::new(Arc::clone(&event_bus), &endpoints.coordinator)
            .with_timeout(config.bus.call_timeout());
        let coordinator = Arc::new(OrderCoordinatorHandler::new(
            OrderCoordinatorService::new(
                BusOrchestratorGateway::new(coordinator_client.clone()),
                BusProvisioningReader::new(coordinator_client),
            ),
            Arc::clone(&stores.coordinator),
        )?);

        Ok(Self {
            inventory,
            provisioning,
            orchestrator,
            coordinator,
            stores,
            event_bus,
            config,
        })
    }

    /// The endpoint serving `id`.
    pub fn endpoint(&self, id: ServiceId) -> Arc<dyn ServiceEndpoint> {
        match id {
            ServiceId::InventoryLedger => Arc::clone(&self.inventory) as Arc<dyn ServiceEndpoint>,
            ServiceId::ProvisioningLedger => Arc::clone(&self.provisioning) as _,
            ServiceId::ProcessOrchestrator => Arc::clone(&self.orchestrator) as _,
            ServiceId::OrderCoordinator => Arc::clone(&self.coordinator) as _,
        }
    }

    /// The endpoint name `id` is served under.
    pub fn endpoint_name(&self, id: ServiceId) -> &str {
        let endpoints = &self.config.endpoints;
        match id {
            ServiceId::InventoryLedger => &endpoints.inventory,
            ServiceId::ProvisioningLedger => &endpoints.provisioning,
            ServiceId::ProcessOrchestrator => &endpoints.orchestrator,
            ServiceId::OrderCoordinator => &endpoints.coordinator,
        }
    }

    /// A client on the node's bus calling as `caller`.
    pub fn client(&self, caller: &str) -> ServiceClient {
        ServiceClient::new(Arc::clone(&self.event_bus), caller)
            .with_timeout(self.config.bus.call_timeout())
    }
}
