//! Store browsing handlers.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::StoreListQuery;
use crate::dto::response::{ApiResponse, MyStoreResponse, StoreListItemResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_store_owner;
use crate::state::AppState;

/// GET /api/stores
pub async fn list_stores(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<StoreListQuery>,
) -> Result<Json<ApiResponse<Vec<StoreListItemResponse>>>, ApiError> {
    let stores = state
        .store_service
        .search(&auth, params.search.as_deref(), params.address.as_deref())
        .await?;

    let items = stores.iter().map(StoreListItemResponse::from).collect();

    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/stores/my-store
pub async fn my_store(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MyStoreResponse>>, ApiError> {
    require_store_owner(&auth)?;

    let store = state.store_service.my_store(&auth).await?;

    Ok(Json(ApiResponse::ok(MyStoreResponse::from(&store))))
}
