//! # Node Configuration
//!
//! Unified configuration for the bus, the endpoint names and the
//! orchestrator's admission behaviour.
//!
//! Every value has a default and can be overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CR_CALL_TIMEOUT_MS` | `bus.call_timeout_ms` |
//! | `CR_BUS_CAPACITY` | `bus.capacity` |
//! | `CR_ADMISSION_MODE` | `orchestrator.admission_mode` |
//! | `CR_PLACEHOLDER_POLICY` | `orchestrator.placeholder_policy` |
//! | `CR_INVENTORY_ID` | `endpoints.inventory` |
//! | `CR_PROVISIONING_ID` | `endpoints.provisioning` |
//! | `CR_ORCHESTRATOR_ID` | `endpoints.orchestrator` |
//! | `CR_COORDINATOR_ID` | `endpoints.coordinator` |

use cr_03_process_orchestrator::OrchestratorConfig;
use serde::{Deserialize, Serialize};
use shared_bus::{DEFAULT_CALL_TIMEOUT, DEFAULT_CHANNEL_CAPACITY};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Bus configuration.
    pub bus: BusConfig,
    /// Endpoint names the services are served under.
    pub endpoints: EndpointNames,
    /// Process Orchestrator configuration.
    pub orchestrator: OrchestratorConfig,
}

impl NodeConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from `lookup`. Unparseable values are logged and
    /// skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_parsed(&lookup, "CR_CALL_TIMEOUT_MS", &mut self.bus.call_timeout_ms);
        override_parsed(&lookup, "CR_BUS_CAPACITY", &mut self.bus.capacity);
        override_parsed(
            &lookup,
            "CR_ADMISSION_MODE",
            &mut self.orchestrator.admission_mode,
        );
        override_parsed(
            &lookup,
            "CR_PLACEHOLDER_POLICY",
            &mut self.orchestrator.placeholder_policy,
        );
        override_parsed(&lookup, "CR_INVENTORY_ID", &mut self.endpoints.inventory);
        override_parsed(&lookup, "CR_PROVISIONING_ID", &mut self.endpoints.provisioning);
        override_parsed(&lookup, "CR_ORCHESTRATOR_ID", &mut self.endpoints.orchestrator);
        override_parsed(&lookup, "CR_COORDINATOR_ID", &mut self.endpoints.coordinator);
    }

    /// Check the configuration can be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.call_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.bus.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let names = self.endpoints.all();
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyEndpointName);
            }
            if names[..i].contains(name) {
                return Err(ConfigError::DuplicateEndpointName(name.to_string()));
            }
        }
        Ok(())
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.parse::<T>() {
        Ok(value) => {
            *target = value;
            info!(key, value = %raw, "Configuration override applied");
        }
        Err(e) => warn!(key, value = %raw, "Ignoring invalid configuration override: {}", e),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("call timeout must be greater than zero")]
    ZeroTimeout,

    #[error("bus capacity must be greater than zero")]
    ZeroCapacity,

    #[error("endpoint names must not be empty")]
    EmptyEndpointName,

    #[error("endpoint name '{0}' is used by more than one service")]
    DuplicateEndpointName(String),
}

/// Bus configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusConfig {
    /// Calls queued per endpoint before callers wait for room.
    pub capacity: usize,
    /// Upper bound on any cross-service call, in milliseconds.
    pub call_timeout_ms: u64,
}

impl BusConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHANNEL_CAPACITY,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT.as_millis() as u64,
        }
    }
}

/// Endpoint names on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointNames {
    pub inventory: String,
    pub provisioning: String,
    pub orchestrator: String,
    pub coordinator: String,
}

impl EndpointNames {
    /// Names in start order.
    pub fn all(&self) -> [&str; 4] {
        [
            &self.inventory,
            &self.provisioning,
            &self.orchestrator,
            &self.coordinator,
        ]
    }
}

impl Default for EndpointNames {
    fn default() -> Self {
        Self {
            inventory: "inventory-ledger".to_string(),
            provisioning: "provisioning-ledger".to_string(),
            orchestrator: "process-orchestrator".to_string(),
            coordinator: "order-coordinator".to_string(),
        }
    }
}
