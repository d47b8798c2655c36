//! # Service Registry
//!
//! Tracks which services are hosted on the bus and starts them leaves
//! first.
//!
//! ```text
//!  Level 0   inventory-ledger (cr-01)    provisioning-ledger (cr-02)
//!                   ▲                         ▲      ▲
//!  Level 1          └── process-orchestrator ─┘      │
//!                              (cr-03)               │
//!                                 ▲                  │
//!  Level 2          order-coordinator (cr-04) ───────┘
//! ```
//!
//! Registration enforces the order: a service can only be registered once
//! every service it calls is registered.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use shared_bus::{BusError, InMemoryEventBus, ServiceEndpoint};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::handlers::EndpointHost;

/// Service identifier following the CR naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceId {
    /// CR-01: Inventory Ledger
    InventoryLedger = 1,
    /// CR-02: Provisioning Ledger
    ProvisioningLedger = 2,
    /// CR-03: Process Orchestrator
    ProcessOrchestrator = 3,
    /// CR-04: Order Coordinator
    OrderCoordinator = 4,
}

impl ServiceId {
    /// Crate name of the service.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InventoryLedger => "cr-01-inventory-ledger",
            Self::ProvisioningLedger => "cr-02-provisioning-ledger",
            Self::ProcessOrchestrator => "cr-03-process-orchestrator",
            Self::OrderCoordinator => "cr-04-order-coordinator",
        }
    }

    /// Services this one calls.
    #[must_use]
    pub fn dependencies(&self) -> Vec<ServiceId> {
        match self {
            Self::InventoryLedger | Self::ProvisioningLedger => vec![],
            Self::ProcessOrchestrator => vec![Self::InventoryLedger, Self::ProvisioningLedger],
            Self::OrderCoordinator => vec![Self::ProcessOrchestrator, Self::ProvisioningLedger],
        }
    }

    /// Depth in the call graph; leaves are level 0.
    #[must_use]
    pub fn level(&self) -> usize {
        self.dependencies()
            .iter()
            .map(|dep| dep.level() + 1)
            .max()
            .unwrap_or(0)
    }

    /// All services, leaves first.
    #[must_use]
    pub fn start_order() -> Vec<ServiceId> {
        let mut ids = Self::all();
        ids.sort_by_key(|id| (id.level(), *id));
        ids
    }

    #[must_use]
    pub fn all() -> Vec<ServiceId> {
        vec![
            Self::InventoryLedger,
            Self::ProvisioningLedger,
            Self::ProcessOrchestrator,
            Self::OrderCoordinator,
        ]
    }
}

/// Service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    NotRegistered,
    Registered,
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("[{}] requires {} to be registered first", .service.name(), .dependency.name())]
    DependencyMissing {
        service: ServiceId,
        dependency: ServiceId,
    },

    #[error("[{}] already registered", .0.name())]
    AlreadyRegistered(ServiceId),

    #[error("[{}] endpoint name '{endpoint}' is already served", .service.name())]
    EndpointTaken { service: ServiceId, endpoint: String },

    #[error("[{}] could not be hosted: {source}", .service.name())]
    HostFailed {
        service: ServiceId,
        #[source]
        source: BusError,
    },
}

struct Registration {
    endpoint_name: String,
    endpoint: Arc<dyn ServiceEndpoint>,
}

/// The central service registry.
pub struct ServiceRegistry {
    registrations: RwLock<HashMap<ServiceId, Registration>>,
    status: RwLock<HashMap<ServiceId, ServiceStatus>>,
    hosts: Mutex<Vec<(ServiceId, JoinHandle<()>)>>,
    event_bus: Arc<InMemoryEventBus>,
}

impl ServiceRegistry {
    pub fn new(event_bus: Arc<InMemoryEventBus>) -> Self {
        Self {
            registrations: RwLock::new(HashMap::new()),
            status: RwLock::new(HashMap::new()),
            hosts: Mutex::new(Vec::new()),
            event_bus,
        }
    }

    /// Register a service under its endpoint name.
    pub fn register(
        &self,
        id: ServiceId,
        endpoint_name: impl Into<String>,
        endpoint: Arc<dyn ServiceEndpoint>,
    ) -> Result<(), RegistryError> {
        let endpoint_name = endpoint_name.into();
        let mut registrations = self.registrations.write();

        if registrations.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        if let Some(dependency) = id
            .dependencies()
            .into_iter()
            .find(|dep| !registrations.contains_key(dep))
        {
            return Err(RegistryError::DependencyMissing {
                service: id,
                dependency,
            });
        }
        if registrations
            .values()
            .any(|r| r.endpoint_name == endpoint_name)
        {
            return Err(RegistryError::EndpointTaken {
                service: id,
                endpoint: endpoint_name,
            });
        }

        info!(
            "[Registry] Registering {} as '{}'",
            id.name(),
            endpoint_name
        );
        registrations.insert(
            id,
            Registration {
                endpoint_name,
                endpoint,
            },
        );
        self.status.write().insert(id, ServiceStatus::Registered);
        Ok(())
    }

    /// Host every registered service on the bus, leaves first.
    ///
    /// Each host stops when `shutdown` changes.
    pub fn start_all(&self, shutdown: &watch::Receiver<bool>) -> Result<(), RegistryError> {
        let registrations = self.registrations.read();
        let mut hosts = self.hosts.lock();

        for id in ServiceId::start_order() {
            let Some(registration) = registrations.get(&id) else {
                continue;
            };
            if self.get_status(id) == ServiceStatus::Running {
                continue;
            }

            info!("[Registry] Starting {}", id.name());
            let host = EndpointHost::new(
                registration.endpoint_name.clone(),
                Arc::clone(&registration.endpoint),
                Arc::clone(&self.event_bus),
            );
            let handle = host
                .start(shutdown.clone())
                .map_err(|source| RegistryError::HostFailed {
                    service: id,
                    source,
                })?;
            hosts.push((id, handle));
            self.status.write().insert(id, ServiceStatus::Running);
        }
        Ok(())
    }

    /// Wait for every host to exit. Call after signalling shutdown.
    pub async fn join_all(&self) {
        let hosts: Vec<_> = self.hosts.lock().drain(..).collect();
        for (id, handle) in hosts {
            if let Err(e) = handle.await {
                warn!("[Registry] {} host ended abnormally: {}", id.name(), e);
            }
            self.status.write().insert(id, ServiceStatus::Stopped);
            info!("[Registry] {} stopped", id.name());
        }
    }

    /// Endpoint name a service is registered under.
    pub fn endpoint_name(&self, id: ServiceId) -> Option<String> {
        self.registrations
            .read()
            .get(&id)
            .map(|r| r.endpoint_name.clone())
    }

    pub fn get_status(&self, id: ServiceId) -> ServiceStatus {
        self.status
            .read()
            .get(&id)
            .copied()
            .unwrap_or(ServiceStatus::NotRegistered)
    }

    /// True when every service is running.
    pub fn is_healthy(&self) -> bool {
        ServiceId::all()
            .into_iter()
            .all(|id| self.get_status(id) == ServiceStatus::Running)
    }

    pub fn print_status(&self) {
        info!("===========================================");
        info!("  SERVICE REGISTRY STATUS");
        info!("===========================================");
        for id in ServiceId::start_order() {
            let endpoint = self.endpoint_name(id).unwrap_or_default();
            info!(
                "  {:28} {:20} {:?}",
                id.name(),
                endpoint,
                self.get_status(id)
            );
        }
        let stats = self.event_bus.stats();
        info!(
            "  bus: {} calls, {} replies, {} orphaned, {} pending",
            stats.calls_dispatched,
            stats.replies_delivered,
            stats.replies_orphaned,
            self.event_bus.pending_calls()
        );
        info!("===========================================");
    }
}
