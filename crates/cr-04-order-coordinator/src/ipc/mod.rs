//! IPC module for the Order Coordinator

pub mod handler;

pub use handler::{OrderCoordinatorHandler, SERVICE_TAG};
