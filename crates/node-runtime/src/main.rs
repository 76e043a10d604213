//! RelayMesh node binary.
//!
//! Startup sequence:
//!
//! 1. Load configuration from the environment
//! 2. Install the tracing subscriber on stderr (stdout is the wire)
//! 3. Serve the protocol over stdin/stdout until EOF

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeRuntime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    NodeRuntime::new(config).run().await
}
