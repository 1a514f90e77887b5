//! Ishtar HTTP server entry point
//!
//! Starts the REST API server for the site search.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ishtar::core::config::Config;
use ishtar::core::services::Services;
use ishtar::core::xdg::XdgDirs;
use ishtar::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ishtar=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ishtar site search");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    XdgDirs::new().log_paths();

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create shared services and build the index before taking traffic
    let services = Arc::new(Services::new(config.clone()));
    let report = services.search.warm();
    for failed in report.failed() {
        tracing::warn!("Content source '{}' is missing from search", failed.source);
    }

    let app = http::router(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
