//! Rating repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ratehub_core::error::{AppError, ErrorKind};
use ratehub_core::result::AppResult;
use ratehub_entity::rating::{CreateRating, Rating, RatingWithUser};

/// Row shape for the rating/rater join query.
#[derive(Debug, sqlx::FromRow)]
struct RatingWithUserRow {
    id: Uuid,
    user_id: Uuid,
    store_id: Uuid,
    rating_value: i32,
    created_at: DateTime<Utc>,
    user_name: String,
    user_email: String,
}

impl From<RatingWithUserRow> for RatingWithUser {
    fn from(row: RatingWithUserRow) -> Self {
        Self {
            rating: Rating {
                id: row.id,
                user_id: row.user_id,
                store_id: row.store_id,
                rating_value: row.rating_value,
                created_at: row.created_at,
            },
            user_name: row.user_name,
            user_email: row.user_email,
        }
    }
}

/// Repository for rating CRUD and query operations.
#[derive(Debug, Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    /// Create a new rating repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a single rating by its (user, store) pair.
    pub async fn find_by_user_and_store(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> AppResult<Option<Rating>> {
        sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE user_id = $1 AND store_id = $2",
        )
        .bind(user_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find rating", e))
    }

    /// List all ratings submitted by the given user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Rating>> {
        sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user ratings", e))
    }

    /// List all ratings for the given store with rater identities,
    /// newest first.
    pub async fn find_by_store_with_user(&self, store_id: Uuid) -> AppResult<Vec<RatingWithUser>> {
        let rows = sqlx::query_as::<_, RatingWithUserRow>(
            "SELECT r.id, r.user_id, r.store_id, r.rating_value, r.created_at, \
                    u.name AS user_name, u.email AS user_email \
             FROM ratings r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.store_id = $1 \
             ORDER BY r.created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list store ratings", e)
        })?;

        Ok(rows.into_iter().map(RatingWithUser::from).collect())
    }

    /// Create a new rating.
    pub async fn create(&self, data: &CreateRating) -> AppResult<Rating> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (user_id, store_id, rating_value) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.store_id)
        .bind(data.rating_value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("ratings_user_id_store_id_key") =>
            {
                AppError::conflict("You have already rated this store")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create rating", e),
        })
    }

    /// Overwrite the value of an existing rating.
    pub async fn update_value(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        rating_value: i32,
    ) -> AppResult<Option<Rating>> {
        sqlx::query_as::<_, Rating>(
            "UPDATE ratings SET rating_value = $3 \
             WHERE user_id = $1 AND store_id = $2 \
             RETURNING *",
        )
        .bind(user_id)
        .bind(store_id)
        .bind(rating_value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update rating", e))
    }

    /// Delete a rating by its (user, store) pair.
    pub async fn delete(&self, user_id: Uuid, store_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ratings WHERE user_id = $1 AND store_id = $2")
            .bind(user_id)
            .bind(store_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete rating", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total ratings.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count ratings", e))
    }
}
