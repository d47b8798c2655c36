//! Outbound Ports (Driven Ports / SPI)
//!
//! The ledger depends only on its own key/value store and a clock. Both
//! ports are shared by every ledger and live in `shared-types`.

pub use shared_types::{LedgerStore, TimeSource};
