//! Authentication service: bearer header parsing and token validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::backend::TaskBackend;
use crate::errors::{AppError, UnauthorizedReason};

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Bearer (.+)$").expect("bearer pattern is a valid regex"));

/// Extract the token from an `Authorization` header value.
///
/// An absent or empty value is missing; anything not shaped like
/// `Bearer <token>` is malformed.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::Unauthorized(UnauthorizedReason::MissingCredentials)),
    };

    BEARER_PATTERN
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(AppError::Unauthorized(UnauthorizedReason::MalformedCredentials))
}

/// Validate an `Authorization` header value against the backend.
pub async fn validate_auth_header(
    backend: &dyn TaskBackend,
    header: Option<&str>,
) -> Result<(), AppError> {
    let result = match extract_bearer_token(header) {
        Ok(token) => {
            if backend.authenticate(token).await {
                Ok(())
            } else {
                Err(AppError::Unauthorized(UnauthorizedReason::AuthenticationFailed))
            }
        }
        Err(e) => Err(e),
    };

    if let Err(ref e) = result {
        tracing::warn!(reason = %e.reason(), "Rejected dashboard request");
    }
    result
}
