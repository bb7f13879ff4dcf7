//! Route definitions for the RateHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(store_routes())
        .merge(rating_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, password change
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/update-password", put(handlers::auth::update_password))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/profile", get(handlers::user::get_profile))
        .route("/user/profile", put(handlers::user::update_profile))
}

/// Store browsing and owner dashboard
fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/stores", get(handlers::store::list_stores))
        .route("/stores/my-store", get(handlers::store::my_store))
}

/// Rating lifecycle (regular users only)
fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(handlers::rating::submit_rating))
        .route("/ratings/{store_id}", put(handlers::rating::update_rating))
        .route(
            "/ratings/{store_id}",
            delete(handlers::rating::delete_rating),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(handlers::admin::stats::stats))
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users", post(handlers::admin::users::create_user))
        .route(
            "/admin/users/{id}",
            delete(handlers::admin::users::delete_user),
        )
        .route("/admin/stores", get(handlers::admin::stores::list_stores))
        .route("/admin/stores", post(handlers::admin::stores::create_store))
        .route(
            "/admin/stores/{id}",
            delete(handlers::admin::stores::delete_store),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
