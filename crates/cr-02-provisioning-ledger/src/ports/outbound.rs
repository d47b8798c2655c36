//! Outbound Ports (Driven Ports / SPI)

pub use shared_types::{LedgerStore, TimeSource};
