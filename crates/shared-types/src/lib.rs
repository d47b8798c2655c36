//! # Shared Types Crate
//!
//! This crate contains every type that crosses a service boundary in the
//! capacity reservation workflow.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The circuit and order record shapes, their
//!   codec and the argument contract are defined once here and used by all
//!   four services.
//! - **Envelope Outcomes**: Every call returns a [`CallOutcome`]; failures
//!   carry an [`ErrorKind`] plus a human-readable message.
//! - **Typed Dispatch**: Function names are resolved into per-service
//!   operation enums validated at startup by [`OperationTable`].
//! - **Store Port**: Services own their state only through [`LedgerStore`].

pub mod args;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod operations;
pub mod store;
pub mod time;

pub use args::{parse_bandwidth, parse_positive_bandwidth, validate_args, ArgumentError};
pub use entities::*;
pub use envelope::CallOutcome;
pub use errors::{CallFailure, ErrorKind};
pub use operations::{
    CoordinatorOperation, InventoryOperation, Operation, OperationTable, OperationTableError,
    OrchestratorOperation, ProvisioningOperation, INIT_ARITY,
};
pub use store::{InMemoryLedgerStore, LedgerStore, Selector, StoreEntry, StoreError};
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource, TIMESTAMP_FORMAT};
