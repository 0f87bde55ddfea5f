//! Groupie catalog server entry point.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `groupie-config.yaml` plus env overrides
//! 3. Build the HTTP data source and application state
//! 4. Serve until `Ctrl-C`
//!
//! The remote datasets are not fetched here; the first request fills the
//! cache.

use std::path::Path;
use std::sync::Arc;

use groupie_client::HttpSource;
use groupie_server::config::{DEFAULT_CONFIG_PATH, ServiceConfig};
use groupie_server::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, template loading, binding or
/// serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("groupie-server starting");

    // 2. Load configuration.
    let config_path =
        std::env::var("GROUPIE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let config = ServiceConfig::load(Path::new(&config_path))?;
    info!(
        config_path,
        api_url = config.api.base_url,
        host = config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    // 3. Build state.
    let source = HttpSource::new(config.api.base_url.clone());
    let state = Arc::new(AppState::new(source)?);

    // 4. Serve.
    start_server(&config.server, state).await?;

    Ok(())
}
