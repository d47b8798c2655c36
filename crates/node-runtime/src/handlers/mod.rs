//! # Bus Handlers
//!
//! Bridges bus traffic to the service endpoints.

pub mod endpoint_host;

pub use endpoint_host::EndpointHost;
