//! Store entity model and derived read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::rating::RatingWithUser;

/// A store registered on the platform.
///
/// Every store belongs to exactly one owner with role `store_owner`;
/// the database enforces one store per owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Store {
    /// Unique store identifier.
    pub id: Uuid,
    /// Store name (20-60 characters).
    pub name: String,
    /// Store address (up to 400 characters).
    pub address: String,
    /// The owning user's ID.
    pub owner_id: Uuid,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStore {
    /// Store name.
    pub name: String,
    /// Store address.
    pub address: String,
    /// The owning user's ID (must have role `store_owner`).
    pub owner_id: Uuid,
}

/// A store joined with its owner's identity and rating aggregates.
///
/// `average_rating` is derived in SQL and is 0.0 for stores with no
/// ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreWithOwner {
    /// The store row.
    pub store: Store,
    /// Owner's display name.
    pub owner_name: String,
    /// Owner's email.
    pub owner_email: String,
    /// Arithmetic mean of the store's rating values.
    pub average_rating: f64,
    /// Total number of ratings.
    pub total_ratings: i64,
}

/// A store together with all of its ratings and rater identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreWithRatings {
    /// The store row.
    pub store: Store,
    /// All ratings for the store, newest first.
    pub ratings: Vec<RatingWithUser>,
    /// Arithmetic mean of the rating values, 0.0 if none.
    pub average_rating: f64,
}
