//! IPC Handler for the Provisioning Ledger

use crate::domain::errors::ProvisioningError;
use crate::ports::inbound::ProvisioningLedgerApi;
use async_trait::async_trait;
use shared_bus::ServiceEndpoint;
use shared_types::{
    parse_positive_bandwidth, validate_args, CallFailure, CallOutcome, Operation, OperationTable,
    OperationTableError, ProvisioningOperation, INIT_ARITY,
};
use tracing::{debug, error, warn};

/// Tag used as the log prefix for this service.
pub const SERVICE_TAG: &str = "cr-02";

/// IPC Handler for the Provisioning Ledger.
pub struct ProvisioningLedgerHandler<A> {
    api: A,
    operations: OperationTable<ProvisioningOperation>,
}

impl<A: ProvisioningLedgerApi> ProvisioningLedgerHandler<A> {
    /// Build the handler, validating the operation table.
    pub fn new(api: A) -> Result<Self, OperationTableError> {
        Ok(Self {
            api,
            operations: OperationTable::build()?,
        })
    }

    /// The wrapped API.
    pub fn api(&self) -> &A {
        &self.api
    }

    async fn dispatch(
        &self,
        operation: ProvisioningOperation,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, ProvisioningError> {
        validate_args(operation.name(), args, operation.arity())?;

        match operation {
            ProvisioningOperation::OpenOrder => {
                self.api.open_order(&args[0]).await?;
                Ok(None)
            }
            ProvisioningOperation::Complete => {
                let requested = parse_positive_bandwidth("requestedBandwidth", &args[2])?;
                self.api
                    .complete(&args[0], &args[1], requested, &args[3])
                    .await?;
                Ok(None)
            }
            ProvisioningOperation::Get => {
                let order = self.api.get(&args[0]).await?;
                Ok(Some(order.bytes))
            }
        }
    }
}

#[async_trait]
impl<A: ProvisioningLedgerApi + 'static> ServiceEndpoint for ProvisioningLedgerHandler<A> {
    fn service_tag(&self) -> &'static str {
        SERVICE_TAG
    }

    async fn init(&self, args: Vec<String>) -> CallOutcome {
        let result = async {
            validate_args("init", &args, INIT_ARITY)?;
            self.api.init_entry(&args[0], &args[1]).await
        }
        .await;

        match result {
            Ok(()) => CallOutcome::ok(),
            Err(e) => {
                error!("[cr-02] Init failed: {}", e);
                CallFailure::from(e).into()
            }
        }
    }

    async fn invoke(&self, function: &str, args: Vec<String>) -> CallOutcome {
        debug!(function, args = ?args, "[cr-02] Invoke");

        let Some(operation) = self.operations.resolve(function) else {
            warn!(function, "[cr-02] Unknown function");
            return CallFailure::unknown_function(function).into();
        };

        match self.dispatch(operation, &args).await {
            Ok(payload) => CallOutcome::Success(payload),
            Err(e) => {
                debug!(function, kind = %e.kind(), "[cr-02] {} failed: {}", function, e);
                CallFailure::from(e).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::service::ProvisioningLedgerService;
    use shared_types::{
        ErrorKind, FixedTimeSource, InMemoryLedgerStore, LedgerRecord, OrderRecord,
    };
    use std::sync::Arc;

    type Handler = ProvisioningLedgerHandler<
        ProvisioningLedgerService<InMemoryLedgerStore, FixedTimeSource>,
    >;

    fn handler() -> Handler {
        let service = ProvisioningLedgerService::new(
            Arc::new(InMemoryLedgerStore::new()),
            FixedTimeSource::epoch(),
        );
        ProvisioningLedgerHandler::new(service).unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let handler = handler();
        assert!(handler.invoke("openOrder", args(&["O1"])).await.is_success());
        assert!(handler
            .invoke("complete", args(&["O1", "C1", "60", "op"]))
            .await
            .is_success());

        let bytes = handler
            .invoke("get", args(&["O1"]))
            .await
            .into_result()
            .unwrap()
            .unwrap();
        let record = OrderRecord::decode(&bytes).unwrap();
        assert_eq!(record.requested_bandwidth, 60);
        assert_eq!(record.operator_id, "op");
        assert!(record.status);
    }

    #[tokio::test]
    async fn test_get_not_found_messages() {
        let handler = handler();
        let absent = handler
            .invoke("get", args(&["O1"]))
            .await
            .into_result()
            .unwrap_err();

        handler.invoke("openOrder", args(&["O1"])).await;
        let pending = handler
            .invoke("get", args(&["O1"]))
            .await
            .into_result()
            .unwrap_err();

        assert_eq!(absent.kind, ErrorKind::NotFound);
        assert_eq!(pending.kind, ErrorKind::NotFound);
        assert!(pending.message.contains("not a completed order"));
        assert!(!absent.message.contains("not a completed order"));
    }

    #[tokio::test]
    async fn test_complete_argument_errors() {
        let handler = handler();
        handler.invoke("openOrder", args(&["O1"])).await;

        let zero = handler
            .invoke("complete", args(&["O1", "C1", "0", "op"]))
            .await;
        assert_eq!(zero.failure_kind(), Some(ErrorKind::InvalidArgument));

        let garbage = handler
            .invoke("complete", args(&["O1", "C1", "6O", "op"]))
            .await;
        assert_eq!(garbage.failure_kind(), Some(ErrorKind::InvalidArgument));

        let arity = handler.invoke("complete", args(&["O1", "C1", "60"])).await;
        assert_eq!(arity.failure_kind(), Some(ErrorKind::InvalidArgument));
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let outcome = handler().invoke("cancel", args(&["O1"])).await;
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::UnknownFunction));
    }

    #[tokio::test]
    async fn test_init_establishes_key_for_complete() {
        let handler = handler();
        assert!(handler.init(args(&["O1", "pending"])).await.is_success());
        assert!(handler
            .invoke("complete", args(&["O1", "C1", "60", "op"]))
            .await
            .is_success());
    }
}
