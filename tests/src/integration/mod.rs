//! # Cross-Service Integration Flows
//!
//! Every test starts a full node and drives it over the bus the way an
//! external caller would.

pub mod admission_flows;
pub mod bootstrap;
pub mod order_readback;
pub mod transport;
