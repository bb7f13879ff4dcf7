//! User repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ratehub_core::error::{AppError, ErrorKind};
use ratehub_core::result::AppResult;
use ratehub_entity::store::Store;
use ratehub_entity::user::{CreateUser, User, UserRole, UserWithStore};

/// Row shape for the users-with-store LEFT JOIN query.
#[derive(Debug, sqlx::FromRow)]
struct UserWithStoreRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    address: String,
    created_at: DateTime<Utc>,
    store_id: Option<Uuid>,
    store_name: Option<String>,
    store_address: Option<String>,
    store_created_at: Option<DateTime<Utc>>,
}

impl From<UserWithStoreRow> for UserWithStore {
    fn from(row: UserWithStoreRow) -> Self {
        let owned_store = match (
            row.store_id,
            row.store_name,
            row.store_address,
            row.store_created_at,
        ) {
            (Some(id), Some(name), Some(address), Some(created_at)) => Some(Store {
                id,
                name,
                address,
                owner_id: row.id,
                created_at,
            }),
            _ => None,
        };

        Self {
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                password_hash: row.password_hash,
                role: row.role,
                address: row.address,
                created_at: row.created_at,
            },
            owned_store,
        }
    }
}

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users with their owned store, optionally filtered by a
    /// name/email/address substring and/or an exact role.
    pub async fn find_all_with_store(
        &self,
        search: Option<&str>,
        role: Option<UserRole>,
    ) -> AppResult<Vec<UserWithStore>> {
        let pattern = search.map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, UserWithStoreRow>(
            "SELECT u.id, u.name, u.email, u.password_hash, u.role, u.address, u.created_at, \
                    s.id AS store_id, s.name AS store_name, s.address AS store_address, \
                    s.created_at AS store_created_at \
             FROM users u \
             LEFT JOIN stores s ON s.owner_id = u.id \
             WHERE ($1::text IS NULL \
                    OR u.name ILIKE $1 OR u.email ILIKE $1 OR u.address ILIKE $1) \
               AND ($2::user_role IS NULL OR u.role = $2) \
             ORDER BY u.created_at ASC",
        )
        .bind(pattern)
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(rows.into_iter().map(UserWithStore::from).collect())
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("User with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Update a user's name and address.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: &str,
        address: &str,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, address = $3 WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .bind(address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Update a user's password hash.
    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }
        Ok(())
    }

    /// Delete a user by ID. Owned stores and ratings cascade.
    pub async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
