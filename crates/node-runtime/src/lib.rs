//! # Node Runtime Library
//!
//! Exposes the runtime's modules for testing. The main entry point is the
//! `main.rs` binary.
//!
//! - `container/` - Service construction and configuration
//! - `registry/` - Service identities, dependency order and status
//! - `handlers/` - Endpoint hosts serving services on the bus
//! - `runtime` - Startup, self-test and shutdown

pub mod container;
pub mod handlers;
pub mod registry;
pub mod runtime;

pub use container::{NodeConfig, ServiceContainer};
pub use registry::{RegistryError, ServiceId, ServiceRegistry, ServiceStatus};
pub use runtime::{NodeRuntime, RUNTIME_CALLER, SELF_TEST_KEY};
