//! Publications API Gateway
//!
//! HTTP surface over the papers and footnotes tables.
//! Handles:
//! - Request routing
//! - Body extraction and required-field validation
//! - Observability (logging, metrics, request ids)

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod validation;

use axum::{http::StatusCode, routing::get, Router};
use publications_common::{config::AppConfig, PublicationStore};
use std::sync::Arc;
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn PublicationStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn PublicationStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Requests running past `limit` get 408
fn timeout_layer(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // Backpressure
    let timeout = timeout_layer(state.config.request_timeout());
    let concurrency = ConcurrencyLimitLayer::new(state.config.server.max_concurrent_requests);

    // API routes; static `/papers/footnotes` takes precedence over `/papers/{id}`
    let api_routes = Router::new()
        .route(
            "/papers",
            get(handlers::papers::list_papers).post(handlers::papers::create_paper),
        )
        .route(
            "/papers/footnotes",
            get(handlers::footnotes::list_footnotes).post(handlers::footnotes::create_footnote),
        )
        .route("/papers/{id}", get(handlers::papers::get_paper))
        .route(
            "/papers/{id}/footnotes",
            get(handlers::footnotes::get_footnotes_for_paper),
        );

    // Compose the app
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .nest("/api/v1", api_routes)
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(timeout)
        .layer(concurrency)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(propagate_id)
        .layer(request_id)
        .with_state(state)
}
