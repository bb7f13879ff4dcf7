//! Application builder — wires repositories, services, and state into
//! an Axum app and runs the HTTP server.

use std::sync::Arc;

use axum::Router;

use ratehub_auth::jwt::{JwtDecoder, JwtEncoder};
use ratehub_auth::password::{PasswordHasher, PasswordValidator};
use ratehub_core::config::AppConfig;
use ratehub_core::error::AppError;
use ratehub_database::DatabasePool;
use ratehub_database::repositories::{RatingRepository, StoreRepository, UserRepository};
use ratehub_service::auth::AuthService;
use ratehub_service::rating::RatingService;
use ratehub_service::report::StatsService;
use ratehub_service::store::{AdminStoreService, StoreService};
use ratehub_service::user::{AdminUserService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let pool = db.pool().clone();

    // Repositories
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let store_repo = Arc::new(StoreRepository::new(pool.clone()));
    let rating_repo = Arc::new(RatingRepository::new(pool));

    // Auth primitives
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Services
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&store_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let store_service = Arc::new(StoreService::new(
        Arc::clone(&store_repo),
        Arc::clone(&rating_repo),
    ));
    let rating_service = Arc::new(RatingService::new(
        Arc::clone(&rating_repo),
        Arc::clone(&store_repo),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let admin_store_service = Arc::new(AdminStoreService::new(
        Arc::clone(&store_repo),
        Arc::clone(&user_repo),
    ));
    let stats_service = Arc::new(StatsService::new(user_repo, store_repo, rating_repo));

    AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        auth_service,
        user_service,
        store_service,
        rating_service,
        admin_user_service,
        admin_store_service,
        stats_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, db: DatabasePool) -> Router {
    build_router(build_state(config, db))
}

/// Runs the RateHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("RateHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("RateHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
