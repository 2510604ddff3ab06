//! Route definitions for the task dashboard API.

pub mod dashboard;
pub mod health;

use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([Method::GET])
        .allow_headers([axum::http::header::AUTHORIZATION]);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/dashboard", get(dashboard::get_dashboard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
