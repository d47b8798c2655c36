//! Application layer for the Process Orchestrator

pub mod service;

pub use service::ProcessOrchestratorService;
