//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use ratehub_entity::user::UserRole;
use ratehub_service::user::AdminCreateUser;

use crate::dto::request::{AdminCreateUserRequest, UserListQuery};
use crate::dto::response::{AdminUserResponse, ApiResponse, MessageResponse, UserResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<UserListQuery>,
) -> Result<Json<ApiResponse<Vec<AdminUserResponse>>>, ApiError> {
    require_admin(&auth)?;

    let role = params
        .role
        .as_deref()
        .map(str::parse::<UserRole>)
        .transpose()?;

    let users = state
        .admin_user_service
        .list_users(params.search.as_deref(), role)
        .await?;

    let items = users.iter().map(AdminUserResponse::from).collect();

    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AdminCreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    require_admin(&auth)?;
    validate_request(&req)?;
    let role: UserRole = req.role.parse()?;

    let user = state
        .admin_user_service
        .create_user(
            &auth,
            AdminCreateUser {
                name: req.name,
                email: req.email,
                password: req.password,
                address: req.address,
                role,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(&user))),
    ))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;

    state.admin_user_service.delete_user(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted successfully".to_string(),
    })))
}
