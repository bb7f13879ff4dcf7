//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ratehub_entity::rating::{Rating, RatingWithUser};
use ratehub_entity::store::{Store, StoreWithOwner, StoreWithRatings};
use ratehub_entity::user::{User, UserWithStore};
use ratehub_service::auth::AuthenticatedUser;
use ratehub_service::store::StoreForUser;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: String,
    /// Postal address.
    pub address: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            address: user.address.clone(),
            created_at: user.created_at,
        }
    }
}

/// Signup/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

impl From<&AuthenticatedUser> for AuthResponse {
    fn from(auth: &AuthenticatedUser) -> Self {
        Self {
            token: auth.token.clone(),
            expires_at: auth.expires_at,
            user: UserResponse::from(&auth.user),
        }
    }
}

/// Store summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreResponse {
    /// Store ID.
    pub id: Uuid,
    /// Store name.
    pub name: String,
    /// Store address.
    pub address: String,
    /// Owning user's ID.
    pub owner_id: Uuid,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            address: store.address.clone(),
            owner_id: store.owner_id,
            created_at: store.created_at,
        }
    }
}

/// User with their owned store (admin listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserResponse {
    /// User summary.
    #[serde(flatten)]
    pub user: UserResponse,
    /// The store owned by this user, if any.
    pub owned_store: Option<StoreResponse>,
}

impl From<&UserWithStore> for AdminUserResponse {
    fn from(entry: &UserWithStore) -> Self {
        Self {
            user: UserResponse::from(&entry.user),
            owned_store: entry.owned_store.as_ref().map(StoreResponse::from),
        }
    }
}

/// Rating summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    /// Rating ID.
    pub id: Uuid,
    /// Rated store's ID.
    pub store_id: Uuid,
    /// Rating value.
    pub rating_value: i32,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&Rating> for RatingResponse {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id,
            store_id: rating.store_id,
            rating_value: rating.rating_value,
            created_at: rating.created_at,
        }
    }
}

/// Store listing entry with aggregates and the caller's own rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListItemResponse {
    /// Store ID.
    pub id: Uuid,
    /// Store name.
    pub name: String,
    /// Store address.
    pub address: String,
    /// Owning user's ID.
    pub owner_id: Uuid,
    /// Owner's display name.
    pub owner_name: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Arithmetic mean of rating values, 0 if none.
    pub average_rating: f64,
    /// Total number of ratings.
    pub total_ratings: i64,
    /// The caller's existing rating, if any.
    pub user_rating: Option<RatingResponse>,
}

impl From<&StoreForUser> for StoreListItemResponse {
    fn from(entry: &StoreForUser) -> Self {
        Self {
            id: entry.store.store.id,
            name: entry.store.store.name.clone(),
            address: entry.store.store.address.clone(),
            owner_id: entry.store.store.owner_id,
            owner_name: entry.store.owner_name.clone(),
            created_at: entry.store.store.created_at,
            average_rating: entry.store.average_rating,
            total_ratings: entry.store.total_ratings,
            user_rating: entry.user_rating.as_ref().map(RatingResponse::from),
        }
    }
}

/// Store listing entry for the admin view (no caller rating).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStoreResponse {
    /// Store ID.
    pub id: Uuid,
    /// Store name.
    pub name: String,
    /// Store address.
    pub address: String,
    /// Owning user's ID.
    pub owner_id: Uuid,
    /// Owner's display name.
    pub owner_name: String,
    /// Owner's email.
    pub owner_email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Arithmetic mean of rating values, 0 if none.
    pub average_rating: f64,
    /// Total number of ratings.
    pub total_ratings: i64,
}

impl From<&StoreWithOwner> for AdminStoreResponse {
    fn from(entry: &StoreWithOwner) -> Self {
        Self {
            id: entry.store.id,
            name: entry.store.name.clone(),
            address: entry.store.address.clone(),
            owner_id: entry.store.owner_id,
            owner_name: entry.owner_name.clone(),
            owner_email: entry.owner_email.clone(),
            created_at: entry.store.created_at,
            average_rating: entry.average_rating,
            total_ratings: entry.total_ratings,
        }
    }
}

/// A single rating with rater identity (owner dashboard).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRatingResponse {
    /// Rating ID.
    pub id: Uuid,
    /// Rater's user ID.
    pub user_id: Uuid,
    /// Rater's name.
    pub user_name: String,
    /// Rater's email.
    pub user_email: String,
    /// Rating value.
    pub rating_value: i32,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&RatingWithUser> for StoreRatingResponse {
    fn from(entry: &RatingWithUser) -> Self {
        Self {
            id: entry.rating.id,
            user_id: entry.rating.user_id,
            user_name: entry.user_name.clone(),
            user_email: entry.user_email.clone(),
            rating_value: entry.rating.rating_value,
            created_at: entry.rating.created_at,
        }
    }
}

/// The owner dashboard: their store, its ratings, and the average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyStoreResponse {
    /// Store summary.
    #[serde(flatten)]
    pub store: StoreResponse,
    /// Arithmetic mean of rating values, 0 if none.
    pub average_rating: f64,
    /// Total number of ratings.
    pub total_ratings: usize,
    /// All ratings, newest first.
    pub ratings: Vec<StoreRatingResponse>,
}

impl From<&StoreWithRatings> for MyStoreResponse {
    fn from(entry: &StoreWithRatings) -> Self {
        Self {
            store: StoreResponse::from(&entry.store),
            average_rating: entry.average_rating,
            total_ratings: entry.ratings.len(),
            ratings: entry.ratings.iter().map(StoreRatingResponse::from).collect(),
        }
    }
}

/// Platform totals for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total registered users.
    pub total_users: i64,
    /// Total registered stores.
    pub total_stores: i64,
    /// Total submitted ratings.
    pub total_ratings: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
