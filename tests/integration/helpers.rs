//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use ratehub_core::config::AppConfig;
use ratehub_database::DatabasePool;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (Null if the body was empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application against a clean database.
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        ratehub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        Self::clean_database(&db_pool).await;

        let router = ratehub_api::build_app(config, db);

        Self { router, db_pool }
    }

    /// Wipe all tables between tests.
    async fn clean_database(pool: &PgPool) {
        sqlx::query("TRUNCATE TABLE ratings, stores, users CASCADE")
            .execute(pool)
            .await
            .expect("Failed to clean database");
    }

    /// Issue a request against the router and decode the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Sign up an account and return its token.
    pub async fn signup(&self, name: &str, email: &str, role: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": "Secret#123",
                    "address": "12 Example Street",
                    "role": role,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Log in and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Create an admin account directly (signup forbids the role) and
    /// return its token.
    pub async fn create_admin(&self, email: &str) -> String {
        let hasher = ratehub_auth::password::PasswordHasher::new();
        let hash = hasher.hash_password("Secret#123").unwrap();

        sqlx::query(
            "INSERT INTO users (name, email, password_hash, role, address) \
             VALUES ($1, $2, $3, 'admin', $4)",
        )
        .bind("Administrator Account Holder")
        .bind(email)
        .bind(hash)
        .bind("1 Admin Plaza")
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert admin");

        self.login(email, "Secret#123").await
    }
}
