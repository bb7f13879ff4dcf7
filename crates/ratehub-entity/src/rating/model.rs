//! Rating entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single user's rating of a single store.
///
/// The database enforces at most one rating per (user, store) pair;
/// subsequent submissions must overwrite instead of duplicating.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    /// Unique rating identifier.
    pub id: Uuid,
    /// The rating user's ID.
    pub user_id: Uuid,
    /// The rated store's ID.
    pub store_id: Uuid,
    /// Rating value in [1, 5].
    pub rating_value: i32,
    /// When the rating was first submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRating {
    /// The rating user's ID.
    pub user_id: Uuid,
    /// The rated store's ID.
    pub store_id: Uuid,
    /// Rating value in [1, 5].
    pub rating_value: i32,
}

/// A rating joined with the rater's identity, for the owner dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingWithUser {
    /// The rating row.
    pub rating: Rating,
    /// Rater's display name.
    pub user_name: String,
    /// Rater's email.
    pub user_email: String,
}
