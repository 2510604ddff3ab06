//! Dashboard route: per-user task completion.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::auth::Authenticated;
use crate::models::dashboard::DashboardRow;
use crate::services::dashboard;
use crate::AppState;

/// GET /dashboard — completion statistics for every user.
pub async fn get_dashboard(
    State(state): State<AppState>,
    _auth: Authenticated,
) -> Result<Json<Vec<DashboardRow>>, AppError> {
    let rows = dashboard::compute_dashboard(state.backend.as_ref()).await;
    Ok(Json(rows))
}
