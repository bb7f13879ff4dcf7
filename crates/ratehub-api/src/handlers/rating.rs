//! Rating lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{SubmitRatingRequest, UpdateRatingRequest};
use crate::dto::response::{ApiResponse, MessageResponse, RatingResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_user;
use crate::state::AppState;

/// POST /api/ratings
pub async fn submit_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitRatingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RatingResponse>>), ApiError> {
    require_user(&auth)?;
    validate_request(&req)?;

    let rating = state
        .rating_service
        .submit(&auth, req.store_id, req.rating_value)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RatingResponse::from(&rating))),
    ))
}

/// PUT /api/ratings/{store_id}
pub async fn update_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(store_id): Path<Uuid>,
    Json(req): Json<UpdateRatingRequest>,
) -> Result<Json<ApiResponse<RatingResponse>>, ApiError> {
    require_user(&auth)?;
    validate_request(&req)?;

    let rating = state
        .rating_service
        .update(&auth, store_id, req.rating_value)
        .await?;

    Ok(Json(ApiResponse::ok(RatingResponse::from(&rating))))
}

/// DELETE /api/ratings/{store_id}
pub async fn delete_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(store_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_user(&auth)?;

    state.rating_service.delete(&auth, store_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Rating deleted successfully".to_string(),
    })))
}
