//! # Service Endpoint
//!
//! The uniform surface every service exposes on the bus: the bootstrap
//! `init` write and a single dynamic `invoke` entry point.

use crate::events::LedgerCall;
use async_trait::async_trait;
use shared_types::{validate_args, CallFailure, CallOutcome, ErrorKind, LedgerStore, INIT_ARITY};
use tracing::{error, info};

/// A service that can be hosted on the bus.
#[async_trait]
pub trait ServiceEndpoint: Send + Sync {
    /// Short tag used as the log prefix (e.g. `cr-01`).
    fn service_tag(&self) -> &'static str;

    /// Bootstrap self-test write of `(key, value)` into the service's store.
    async fn init(&self, args: Vec<String>) -> CallOutcome;

    /// Route to the named operation. Unknown names fail with `UnknownFunction`.
    async fn invoke(&self, function: &str, args: Vec<String>) -> CallOutcome;

    /// Serve one call taken off the bus.
    async fn handle(&self, call: LedgerCall) -> CallOutcome {
        match call {
            LedgerCall::Init { args } => self.init(args).await,
            LedgerCall::Invoke { function, args } => self.invoke(&function, args).await,
        }
    }
}

/// `init` for services whose store only ever receives bootstrap writes.
///
/// Writes `args[1]` raw under `args[0]`. Wrong arity is `InvalidArgument`,
/// a failed write is `Storage`.
pub fn init_into_store<S: LedgerStore + ?Sized>(tag: &str, store: &S, args: &[String]) -> CallOutcome {
    if let Err(e) = validate_args("init", args, INIT_ARITY) {
        return CallFailure::from(e).into();
    }
    match store.put(&args[0], args[1].as_bytes().to_vec()) {
        Ok(()) => {
            info!(key = %args[0], "[{}] Init entry written", tag);
            CallOutcome::ok()
        }
        Err(e) => {
            error!("[{}] Init failed: {}", tag, e);
            CallFailure::new(ErrorKind::Storage, e.to_string()).into()
        }
    }
}
