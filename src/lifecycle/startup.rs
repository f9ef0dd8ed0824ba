//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Build the route table and server
//! - Bind the fixed listen address and serve until shutdown

use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use tokio::net::TcpListener;

use crate::config::{load_or_default, ObservabilityConfig, ServiceConfig, CONFIG_FILE, LISTEN_ADDRESS};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};
use crate::routing::RouteTable;

/// Run the service to completion.
pub async fn run() -> ExitCode {
    let config = match load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            logging::init(&ObservabilityConfig::default());
            tracing::error!(file = CONFIG_FILE, error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::info!("matrix-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        max_upload_bytes = config.limits.max_upload_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    start_metrics(&config);

    let routes = RouteTable::standard();
    for route in routes.iter() {
        tracing::info!(path = %route.path, transform = route.transform.name(), "Route registered");
    }

    let listener = match TcpListener::bind(LISTEN_ADDRESS).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("error starting server: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Listening on {}", LISTEN_ADDRESS);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, routes);
    if let Err(e) = server.run(listener, server_shutdown).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

fn start_metrics(config: &ServiceConfig) {
    if !config.observability.metrics_enabled {
        return;
    }
    match config.observability.metrics_address.parse::<SocketAddr>() {
        Ok(addr) => metrics::init_metrics(addr),
        Err(_) => tracing::error!(
            metrics_address = %config.observability.metrics_address,
            "Failed to parse metrics address"
        ),
    }
}
