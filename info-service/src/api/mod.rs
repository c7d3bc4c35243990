//! HTTP API module for the info service.

pub mod config;
pub mod health;
pub mod info;

use crate::error;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Create the API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(info::service_info))
        .route("/health", get(health::health))
        .route("/config", get(config::show_config))
        .with_state(state);

    with_error_handling(router)
}

/// Attach the 404 fallback, panic-to-500 conversion and request tracing.
pub fn with_error_handling(router: Router) -> Router {
    router
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
