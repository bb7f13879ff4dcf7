//! Auth handlers — signup, login, password change.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use ratehub_entity::user::UserRole;
use ratehub_service::auth::SignupData;

use crate::dto::request::{LoginRequest, SignupRequest, UpdatePasswordRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    validate_request(&req)?;
    let role: UserRole = req.role.parse()?;

    let result = state
        .auth_service
        .signup(SignupData {
            name: req.name,
            email: req.email,
            password: req.password,
            address: req.address,
            role,
            store_name: req.store_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthResponse::from(&result))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_request(&req)?;

    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(&result))))
}

/// PUT /api/auth/update-password
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_request(&req)?;

    state
        .auth_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated successfully".to_string(),
    })))
}
