//! Admin stats handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, StatsResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    require_admin(&auth)?;

    let stats = state.stats_service.overview().await?;

    Ok(Json(ApiResponse::ok(StatsResponse {
        total_users: stats.total_users,
        total_stores: stats.total_stores,
        total_ratings: stats.total_ratings,
    })))
}
