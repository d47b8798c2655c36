//! # Ledger Events
//!
//! Defines the messages that flow through the shared bus.
//!
//! Every cross-service call is a [`CallRequest`] queued to one endpoint
//! name, answered by exactly one [`CallReply`] carrying the same
//! correlation id.

use serde::{Deserialize, Serialize};
use shared_types::CallOutcome;

/// The request half of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCall {
    /// Bootstrap self-test write. Arguments are validated by the endpoint.
    Init { args: Vec<String> },

    /// Dynamic dispatch to a named function.
    Invoke { function: String, args: Vec<String> },
}

impl LedgerCall {
    /// Function name for logging (`init` for the bootstrap call).
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::Init { .. } => "init",
            Self::Invoke { function, .. } => function,
        }
    }
}

/// A call from `source` to the endpoint named `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Unique correlation ID to match request/response.
    pub correlation_id: String,
    /// Calling service (or external client) name.
    pub source: String,
    /// Endpoint name the call is addressed to.
    pub target: String,
    /// What to run.
    pub call: LedgerCall,
}

/// The answer to a [`CallRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReply {
    /// Correlation ID matching the original call.
    pub correlation_id: String,
    /// Endpoint that handled the call.
    pub source: String,
    /// Result of the call.
    pub outcome: CallOutcome,
}

impl CallReply {
    pub fn new(
        correlation_id: impl Into<String>,
        source: impl Into<String>,
        outcome: CallOutcome,
    ) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            source: source.into(),
            outcome,
        }
    }
}
