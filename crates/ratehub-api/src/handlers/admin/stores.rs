//! Admin store management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use ratehub_service::store::AdminCreateStore;

use crate::dto::request::AdminCreateStoreRequest;
use crate::dto::response::{AdminStoreResponse, ApiResponse, MessageResponse, StoreResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/stores
pub async fn list_stores(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<AdminStoreResponse>>>, ApiError> {
    require_admin(&auth)?;

    let stores = state.admin_store_service.list_stores().await?;

    let items = stores.iter().map(AdminStoreResponse::from).collect();

    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/admin/stores
pub async fn create_store(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AdminCreateStoreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StoreResponse>>), ApiError> {
    require_admin(&auth)?;
    validate_request(&req)?;

    let store = state
        .admin_store_service
        .create_store(
            &auth,
            AdminCreateStore {
                name: req.name,
                address: req.address,
                owner_id: req.owner_id,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StoreResponse::from(&store))),
    ))
}

/// DELETE /api/admin/stores/{id}
pub async fn delete_store(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;

    state.admin_store_service.delete_store(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Store deleted successfully".to_string(),
    })))
}
