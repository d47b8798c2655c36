//! Submissions accepted at the external boundary

use shared_types::{Bandwidth, OrchestratorOperation, Operation};

/// A validated `submit` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub orchestrator_id: String,
    pub inventory_id: String,
    pub provisioning_id: String,
    pub order_id: String,
    pub operator_id: String,
    pub circuit_id: String,
    pub requested_bandwidth: Bandwidth,
}

impl Submission {
    /// Arguments for the orchestrator's `admit`, in its positional order.
    pub fn admit_args(&self) -> Vec<String> {
        let args = vec![
            self.orchestrator_id.clone(),
            self.inventory_id.clone(),
            self.provisioning_id.clone(),
            self.circuit_id.clone(),
            self.requested_bandwidth.to_string(),
            self.order_id.clone(),
            self.operator_id.clone(),
        ];
        debug_assert_eq!(args.len(), OrchestratorOperation::Admit.arity());
        args
    }
}
