pub mod backend;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use backend::TaskBackend;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn TaskBackend>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(backend: Arc<dyn TaskBackend>, config: config::AppConfig) -> Self {
        Self { backend, config }
    }
}
