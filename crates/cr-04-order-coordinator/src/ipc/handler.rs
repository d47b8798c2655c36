//! IPC Handler for the Order Coordinator

use crate::domain::errors::CoordinatorError;
use crate::domain::submission::Submission;
use crate::ports::inbound::OrderCoordinatorApi;
use async_trait::async_trait;
use shared_bus::{init_into_store, ServiceEndpoint};
use shared_types::{
    parse_positive_bandwidth, validate_args, CallFailure, CallOutcome, CoordinatorOperation,
    LedgerStore, Operation, OperationTable, OperationTableError,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Tag used as the log prefix for this service.
pub const SERVICE_TAG: &str = "cr-04";

/// IPC Handler for the Order Coordinator.
///
/// `store` only receives `init` writes.
pub struct OrderCoordinatorHandler<A, S> {
    api: A,
    store: Arc<S>,
    operations: OperationTable<CoordinatorOperation>,
}

impl<A: OrderCoordinatorApi, S: LedgerStore> OrderCoordinatorHandler<A, S> {
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

    async fn dispatch(
        &self,
        operation: CoordinatorOperation,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, CoordinatorError> {
        validate_args(operation.name(), args, operation.arity())?;

        match operation {
            // orchestratorId, inventoryId, provisioningId, orderId,
            // operatorId, circuitId, requestedBandwidth
            CoordinatorOperation::Submit => {
                let submission = Submission {
                    orchestrator_id: args[0].clone(),
                    inventory_id: args[1].clone(),
                    provisioning_id: args[2].clone(),
                    order_id: args[3].clone(),
                    operator_id: args[4].clone(),
                    circuit_id: args[5].clone(),
                    requested_bandwidth: parse_positive_bandwidth(
                        "requestedBandwidth",
                        &args[6],
                    )?,
                };
                self.api.submit(submission).await?;
                Ok(None)
            }
            CoordinatorOperation::GetOrder => {
                let bytes = self.api.get_order(&args[0], &args[1]).await?;
                Ok(Some(bytes))
            }
        }
    }
}

#[async_trait]
impl<A, S> ServiceEndpoint for OrderCoordinatorHandler<A, S>
where
    A: OrderCoordinatorApi + 'static,
    S: LedgerStore + 'static,
{
    fn service_tag(&self) -> &'static str {
        SERVICE_TAG
    }

    async fn init(&self, args: Vec<String>) -> CallOutcome {
        init_into_store(SERVICE_TAG, self.store.as_ref(), &args)
    }

    async fn invoke(&self, function: &str, args: Vec<String>) -> CallOutcome {
        debug!(function, args = ?args, "[cr-04] Invoke");

        let Some(operation) = self.operations.resolve(function) else {
            warn!(function, "[cr-04] Unknown function");
            return CallFailure::unknown_function(function).into();
        };

        match self.dispatch(operation, &args).await {
            Ok(payload) => CallOutcome::Success(payload),
            Err(e) => {
                debug!(function, kind = %e.kind(), "[cr-04] {} failed: {}", function, e);
                CallFailure::from(e).into()
            }
        }
    }
}
