//! Domain module for the Order Coordinator

pub mod errors;
pub mod submission;

pub use errors::*;
pub use submission::*;
