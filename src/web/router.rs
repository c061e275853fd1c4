//! Router configuration for the board API.

use axum::{middleware, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::{create_cors_layer, security_headers};
use crate::config::WebConfig;

/// Create the board API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            get(list_threads)
                .post(create_thread)
                .delete(delete_thread)
                .put(report_thread),
        )
        .route(
            "/replies/:board",
            get(get_thread)
                .post(create_reply)
                .delete(delete_reply)
                .put(report_reply),
        );

    Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create a router serving static files, if the directory exists.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    if !Path::new(static_path).is_dir() {
        tracing::warn!("Static file directory not found: {}", static_path);
        return None;
    }

    Some(Router::new().fallback_service(ServeDir::new(static_path)))
}

/// Build the complete application: API, health check, optional static
/// files, and the shared middleware stack.
pub fn create_app(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    let mut router = create_router(app_state).merge(create_health_router());

    if web_config.serve_static {
        if let Some(static_router) = create_static_router(&web_config.static_path) {
            router = router.merge(static_router);
        }
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&web_config.cors_origins))
            .layer(middleware::from_fn(security_headers))
            .layer(CompressionLayer::new()),
    )
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
