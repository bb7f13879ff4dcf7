//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use ratehub_auth::jwt::JwtDecoder;
use ratehub_core::config::AppConfig;
use ratehub_database::DatabasePool;
use ratehub_service::auth::AuthService;
use ratehub_service::rating::RatingService;
use ratehub_service::report::StatsService;
use ratehub_service::store::{AdminStoreService, StoreService};
use ratehub_service::user::{AdminUserService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health probes).
    pub db: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup/login/password-change service.
    pub auth_service: Arc<AuthService>,
    /// User self-service.
    pub user_service: Arc<UserService>,
    /// Store browsing and owner dashboard service.
    pub store_service: Arc<StoreService>,
    /// Rating lifecycle service.
    pub rating_service: Arc<RatingService>,
    /// Admin user management service.
    pub admin_user_service: Arc<AdminUserService>,
    /// Admin store management service.
    pub admin_store_service: Arc<AdminStoreService>,
    /// Platform stats service.
    pub stats_service: Arc<StatsService>,
}
