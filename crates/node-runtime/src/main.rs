//! # Circuit-Reserve Node Runtime
//!
//! Hosts the four services on one in-process bus.
//!
//! ```text
//!                  order-coordinator (cr-04)
//!                    │ admit          │ get
//!                    ▼                │
//!           process-orchestrator (cr-03)
//!             │ checkCapacity  │ openOrder, complete
//!             │ [allocate]     │      │
//!             ▼                ▼      ▼
//!   inventory-ledger (cr-01)  provisioning-ledger (cr-02)
//! ```
//!
//! Logging honours `RUST_LOG` (default `info`). Configuration is read from
//! `CR_*` environment variables.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = NodeConfig::from_env();

    let runtime = NodeRuntime::new(config)?;
    if let Err(e) = runtime.start().await {
        runtime.shutdown().await;
        return Err(e);
    }

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown().await;

    Ok(())
}
