//! Publications API Gateway binary
//!
//! Loads configuration, connects to the database, and serves the router
//! until Ctrl+C or SIGTERM, then drains for at most the shutdown timeout.

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use publications_common::{
    config::AppConfig,
    db::{DbPool, Repository},
    metrics,
};
use publications_gateway::{create_router, server, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    // 2. Setup logging; RUST_LOG overrides the configured level
    init_tracing(&config);

    info!(
        version = publications_common::VERSION,
        "Starting {}...", config.server.title
    );

    // 3. Metrics exporter
    if config.observability.metrics_port != 0 {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics_port));
        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                metrics::LATENCY_BUCKETS,
            )?
            .with_http_listener(metrics_addr)
            .install()?;
        info!(address = %metrics_addr, "Metrics exporter listening");
    }
    metrics::register_metrics();

    // 4. Initialize Database
    let pool = DbPool::new(&config.database).await?;
    let store = Arc::new(Repository::new(pool));

    // 5. Setup Router
    let host = config.server.host.clone();
    let port = config.server.port;
    let title = config.server.title.clone();
    let grace = config.shutdown_timeout();
    let app = create_router(AppState::new(config, store));

    // 6. Start Server with graceful shutdown
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(address = %listener.local_addr()?, "{} is running on {}.", title, port);

    server::serve(listener, app, shutdown_signal(), grace).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
