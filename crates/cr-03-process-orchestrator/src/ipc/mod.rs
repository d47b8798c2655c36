//! IPC module for the Process Orchestrator

pub mod handler;

pub use handler::{ProcessOrchestratorHandler, SERVICE_TAG};
