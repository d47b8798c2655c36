//! IPC Handler for the Process Orchestrator
//!
//! `admit` arrives with seven string arguments in the order
//! `orchestratorId, inventoryId, provisioningId, circuitId,
//! requestedBandwidth, orderId, operatorId`.

use crate::domain::admission::AdmissionRequest;
use crate::domain::errors::OrchestratorError;
use crate::ports::inbound::ProcessOrchestratorApi;
use async_trait::async_trait;
use shared_bus::{init_into_store, ServiceEndpoint};
use shared_types::{
    parse_positive_bandwidth, validate_args, CallFailure, CallOutcome, LedgerStore,
    Operation, OperationTable, OperationTableError, OrchestratorOperation,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Tag used as the log prefix for this service.
pub const SERVICE_TAG: &str = "cr-03";

/// IPC Handler for the Process Orchestrator.
///
/// The orchestrator keeps no ledger state; `store` only receives `init`
/// writes.
pub struct ProcessOrchestratorHandler<A, S> {
    api: A,
    store: Arc<S>,
    operations: OperationTable<OrchestratorOperation>,
}

impl<A: ProcessOrchestratorApi, S: LedgerStore> ProcessOrchestratorHandler<A, S> {
    pub fn new(api: A, store: Arc<S>) -> Result<Self, OperationTableError> {
        Ok(Self {
            api,
            store,
            operations: OperationTable::build()?,
        })
    }

    /// The wrapped API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Store backing `init`.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn parse_admit(args: &[String]) -> Result<AdmissionRequest, OrchestratorError> {
        let operation = OrchestratorOperation::Admit;
        validate_args(operation.name(), args, operation.arity())?;

        Ok(AdmissionRequest {
            orchestrator_id: args[0].clone(),
            inventory_id: args[1].clone(),
            provisioning_id: args[2].clone(),
            circuit_id: args[3].clone(),
            requested_bandwidth: parse_positive_bandwidth("requestedBandwidth", &args[4])?,
            order_id: args[5].clone(),
            operator_id: args[6].clone(),
        })
    }

    async fn dispatch(
        &self,
        operation: OrchestratorOperation,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, OrchestratorError> {
        match operation {
            OrchestratorOperation::Admit => {
                let request = Self::parse_admit(args)?;
                self.api.admit(request).await?;
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<A, S> ServiceEndpoint for ProcessOrchestratorHandler<A, S>
where
    A: ProcessOrchestratorApi + 'static,
    S: LedgerStore + 'static,
{
    fn service_tag(&self) -> &'static str {
        SERVICE_TAG
    }

    async fn init(&self, args: Vec<String>) -> CallOutcome {
        init_into_store(SERVICE_TAG, self.store.as_ref(), &args)
    }

    async fn invoke(&self, function: &str, args: Vec<String>) -> CallOutcome {
        debug!(function, args = ?args, "[cr-03] Invoke");

        let Some(operation) = self.operations.resolve(function) else {
            warn!(function, "[cr-03] Unknown function");
            return CallFailure::unknown_function(function).into();
        };

        match self.dispatch(operation, &args).await {
            Ok(payload) => CallOutcome::Success(payload),
            Err(e) => {
                debug!(function, kind = %e.kind(), "[cr-03] {} failed: {}", function, e);
                CallFailure::from(e).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::service::ProcessOrchestratorService;
    use crate::config::OrchestratorConfig;
    use crate::ports::outbound::mocks::{MockInventory, MockProvisioning};
    use shared_types::{ErrorKind, InMemoryLedgerStore};

    type Handler = ProcessOrchestratorHandler<
        ProcessOrchestratorService<MockInventory, MockProvisioning>,
        InMemoryLedgerStore,
    >;

    fn handler() -> Handler {
        let service = ProcessOrchestratorService::new(
            "process-orchestrator",
            OrchestratorConfig::default(),
            MockInventory::with_circuit("C1", 100),
            MockProvisioning::default(),
        );
        ProcessOrchestratorHandler::new(service, Arc::new(InMemoryLedgerStore::new())).unwrap()
    }

    fn admit_args(requested: &str) -> Vec<String> {
        [
            "process-orchestrator",
            "inventory-ledger",
            "provisioning-ledger",
            "C1",
            requested,
            "O1",
            "op",
        ]
        .iter()
        .map(|v| v.to_string())
        .collect()
    }

    #[tokio::test]
    async fn test_admit_success_has_no_payload() {
        let outcome = handler().invoke("admit", admit_args("60")).await;
        assert_eq!(outcome, CallOutcome::ok());
    }

    #[tokio::test]
    async fn test_admit_maps_positional_arguments() {
        let handler = handler();
        handler.invoke("admit", admit_args("60")).await;

        let completed = handler.api().provisioning().completed.lock();
        let (circuit_id, requested, operator_id) = completed.get("O1").unwrap();
        assert_eq!(circuit_id, "C1");
        assert_eq!(*requested, 60);
        assert_eq!(operator_id, "op");
    }

    #[tokio::test]
    async fn test_invalid_arguments_make_no_downstream_calls() {
        let handler = handler();

        for requested in ["0", "abc", "", "-5"] {
            let outcome = handler.invoke("admit", admit_args(requested)).await;
            assert_eq!(outcome.failure_kind(), Some(ErrorKind::InvalidArgument));
        }
        let mut short = admit_args("10");
        short.pop();
        let outcome = handler.invoke("admit", short).await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::InvalidArgument));

        assert!(handler.api().inventory().calls().is_empty());
    }

    #[tokio::test]
    async fn test_capacity_exceeded_kind() {
        let outcome = handler().invoke("admit", admit_args("101")).await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::CapacityExceeded));
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let outcome = handler().invoke("reserve", admit_args("10")).await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::UnknownFunction));
    }

    #[tokio::test]
    async fn test_init_writes_scratch_store() {
        let handler = handler();
        assert!(handler
            .init(vec!["selftest".to_string(), "ok".to_string()])
            .await
            .is_success());
        assert_eq!(
            handler.store().get("selftest").unwrap(),
            Some(b"ok".to_vec())
        );

        handler.store().set_writable(false);
        let failed = handler
            .init(vec!["selftest".to_string(), "ok".to_string()])
            .await;
        assert_eq!(failed.failure_kind(), Some(ErrorKind::Storage));
    }
}
