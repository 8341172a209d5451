//! HTTP API server for the ReelSolve frontend.
//!
//! Exposes the test endpoint the frontend polls during development,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// Unknown paths and methods fall through to Axum's default 404/405
/// handling; no custom fallback is installed.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/api/test", get(routes::test::get))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
