//! Domain module for the Process Orchestrator
//!
//! The admission request, the capacity decision and the saga errors.

pub mod admission;
pub mod errors;

pub use admission::*;
pub use errors::*;
