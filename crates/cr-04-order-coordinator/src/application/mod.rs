//! Application layer for the Order Coordinator

pub mod service;

pub use service::OrderCoordinatorService;
