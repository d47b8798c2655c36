//! # Service Container
//!
//! Holds every service instance with its store and bus gateways.

pub mod config;
pub mod services;

pub use config::{BusConfig, ConfigError, EndpointNames, NodeConfig};
pub use services::{ContainerError, ServiceContainer, ServiceStores};
