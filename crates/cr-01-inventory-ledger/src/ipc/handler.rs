//! IPC Handler for the Inventory Ledger
//!
//! Turns string-argument calls from the bus into typed API calls and maps
//! every domain error onto its wire kind.

use crate::domain::errors::InventoryError;
use crate::ports::inbound::InventoryLedgerApi;
use async_trait::async_trait;
use serde_json::to_vec;
use shared_bus::ServiceEndpoint;
use shared_types::{
    parse_bandwidth, parse_positive_bandwidth, validate_args, CallFailure, CallOutcome,
    InventoryOperation, LedgerRecord, Operation, OperationTable, OperationTableError,
    INIT_ARITY,
};
use tracing::{debug, error, warn};

/// Tag used as the log prefix for this service.
pub const SERVICE_TAG: &str = "cr-01";

/// IPC Handler for the Inventory Ledger.
pub struct InventoryLedgerHandler<A> {
    api: A,
    operations: OperationTable<InventoryOperation>,
}

impl<A: InventoryLedgerApi> InventoryLedgerHandler<A> {
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
        operation: InventoryOperation,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, InventoryError> {
        validate_args(operation.name(), args, operation.arity())?;

        match operation {
            InventoryOperation::CreateCircuit => {
                let total = parse_bandwidth("totalBandwidth", &args[3])?;
                self.api
                    .create_circuit(&args[0], &args[1], &args[2], total)
                    .await?;
                Ok(None)
            }
            InventoryOperation::Allocate => {
                let amount = parse_positive_bandwidth("amount", &args[1])?;
                self.api.allocate(&args[0], amount).await?;
                Ok(None)
            }
            InventoryOperation::CheckCapacity => {
                let record = self.api.check_capacity(&args[0]).await?;
                let bytes = record
                    .encode()
                    .map_err(|e| InventoryError::corrupt(&args[0], e))?;
                Ok(Some(bytes))
            }
            InventoryOperation::QueryByCircuitId => {
                let rows = self.api.query_by_circuit_id(&args[0]).await?;
                let bytes = to_vec(&rows).map_err(|e| InventoryError::Corrupt {
                    circuit_id: args[0].clone(),
                    reason: e.to_string(),
                })?;
                Ok(Some(bytes))
            }
        }
    }
}

#[async_trait]
impl<A: InventoryLedgerApi + 'static> ServiceEndpoint for InventoryLedgerHandler<A> {
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
                error!("[cr-01] Init failed: {}", e);
                CallFailure::from(e).into()
            }
        }
    }

    async fn invoke(&self, function: &str, args: Vec<String>) -> CallOutcome {
        debug!(function, args = ?args, "[cr-01] Invoke");

        let Some(operation) = self.operations.resolve(function) else {
            warn!(function, "[cr-01] Unknown function");
            return CallFailure::unknown_function(function).into();
        };

        match self.dispatch(operation, &args).await {
            Ok(payload) => CallOutcome::Success(payload),
            Err(e) => {
                debug!(function, kind = %e.kind(), "[cr-01] {} failed: {}", function, e);
                CallFailure::from(e).into()
            }
        }
    }
}
