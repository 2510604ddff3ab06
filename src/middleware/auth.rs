//! Bearer token authentication extractor for Axum handlers.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::errors::{AppError, UnauthorizedReason};
use crate::services::auth as auth_service;
use crate::AppState;

/// Proof that the request carried an accepted bearer token.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(_auth: Authenticated) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| {
                tracing::warn!("Authorization header is not visible ASCII");
                AppError::Unauthorized(UnauthorizedReason::MalformedCredentials)
            })?),
        };

        auth_service::validate_auth_header(state.backend.as_ref(), header).await?;
        Ok(Authenticated)
    }
}
