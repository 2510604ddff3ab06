use std::env;

use axum::http::HeaderValue;

/// Errors raised while reading configuration at start-up.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    /// `frontend_url` pre-validated as a CORS origin header.
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("BACKEND_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BACKEND_PORT",
                value: raw,
            })?,
            None => 3000,
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:5173".to_string());
        let cors_origin =
            HeaderValue::from_str(&frontend_url).map_err(|_| ConfigError::InvalidValue {
                key: "FRONTEND_URL",
                value: frontend_url.clone(),
            })?;

        Ok(Self {
            host,
            port,
            frontend_url,
            cors_origin,
        })
    }
}
