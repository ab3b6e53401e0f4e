//! Application router assembly.
//!
//! Mirrors the hosting boundary: handlers reach services through the
//! container, never by direct construction. Business route modules are
//! expected to `merge` their own `Router` onto the one returned here.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chassis_container::Container;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HttpConfig;

/// Builds the application router.
///
/// Static assets are served at `/` from the configured directory, a
/// permissive CORS layer is attached when enabled, and every request is
/// traced. The container rides along as shared state.
pub fn routes(container: Arc<Container>, config: &HttpConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/services", get(services))
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(container);

    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "healthy"
}

/// Diagnostic listing of the bound provider keys.
async fn services(State(container): State<Arc<Container>>) -> Json<Vec<String>> {
    let mut names: Vec<String> = container
        .provider_names()
        .iter()
        .map(|key| key.to_string())
        .collect();
    names.sort();
    Json(names)
}
