//! Store repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ratehub_core::error::{AppError, ErrorKind};
use ratehub_core::result::AppResult;
use ratehub_entity::store::{CreateStore, Store, StoreWithOwner};

/// Row shape for the store/owner/aggregate join query.
#[derive(Debug, sqlx::FromRow)]
struct StoreWithOwnerRow {
    id: Uuid,
    name: String,
    address: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
    average_rating: f64,
    total_ratings: i64,
}

impl From<StoreWithOwnerRow> for StoreWithOwner {
    fn from(row: StoreWithOwnerRow) -> Self {
        Self {
            store: Store {
                id: row.id,
                name: row.name,
                address: row.address,
                owner_id: row.owner_id,
                created_at: row.created_at,
            },
            owner_name: row.owner_name,
            owner_email: row.owner_email,
            average_rating: row.average_rating,
            total_ratings: row.total_ratings,
        }
    }
}

/// Repository for store CRUD and aggregate query operations.
#[derive(Debug, Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    /// Create a new store repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a store by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find store by id", e)
            })
    }

    /// Find the store owned by the given user, if any.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Option<Store>> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find store by owner", e)
            })
    }

    /// List stores joined with owner identity and rating aggregates,
    /// optionally filtered by name and/or address substring.
    ///
    /// The average is computed in SQL and coalesced to 0 for stores
    /// without ratings.
    pub async fn search_with_owner(
        &self,
        name: Option<&str>,
        address: Option<&str>,
    ) -> AppResult<Vec<StoreWithOwner>> {
        let name_pattern = name.map(|s| format!("%{s}%"));
        let address_pattern = address.map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, StoreWithOwnerRow>(
            "SELECT s.id, s.name, s.address, s.owner_id, s.created_at, \
                    u.name AS owner_name, u.email AS owner_email, \
                    COALESCE(AVG(r.rating_value)::float8, 0) AS average_rating, \
                    COUNT(r.id) AS total_ratings \
             FROM stores s \
             JOIN users u ON u.id = s.owner_id \
             LEFT JOIN ratings r ON r.store_id = s.id \
             WHERE ($1::text IS NULL OR s.name ILIKE $1) \
               AND ($2::text IS NULL OR s.address ILIKE $2) \
             GROUP BY s.id, u.id \
             ORDER BY s.created_at ASC",
        )
        .bind(name_pattern)
        .bind(address_pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search stores", e))?;

        Ok(rows.into_iter().map(StoreWithOwner::from).collect())
    }

    /// Create a new store.
    pub async fn create(&self, data: &CreateStore) -> AppResult<Store> {
        sqlx::query_as::<_, Store>(
            "INSERT INTO stores (name, address, owner_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("stores_owner_id_key") =>
            {
                AppError::conflict("Store owner already has a store")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create store", e),
        })
    }

    /// Delete a store by ID. Its ratings cascade.
    pub async fn delete(&self, store_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(store_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete store", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total stores.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count stores", e))
    }
}
