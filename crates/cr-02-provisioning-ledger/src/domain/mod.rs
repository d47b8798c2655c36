//! Domain module for the Provisioning Ledger
//!
//! Order lifecycle rules and their errors.

pub mod errors;
pub mod lifecycle;

pub use errors::*;
pub use lifecycle::*;
