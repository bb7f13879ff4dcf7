//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Full name.
    #[validate(length(min = 20, max = 60, message = "Name must be 20-60 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password (policy enforced server-side: 8-16 chars, uppercase, special).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Postal address.
    #[validate(length(max = 400, message = "Address must be at most 400 characters"))]
    pub address: String,
    /// Account type: "user" or "store_owner".
    pub role: String,
    /// Store name (store owners only; defaults to "<name>'s Store").
    #[serde(default)]
    pub store_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, max = 16, message = "Password must be 8-16 characters"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password (policy enforced server-side).
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Full name.
    #[validate(length(min = 20, max = 60, message = "Name must be 20-60 characters"))]
    pub name: String,
    /// Postal address.
    #[validate(length(max = 400, message = "Address must be at most 400 characters"))]
    pub address: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminCreateUserRequest {
    /// Full name.
    #[validate(length(min = 20, max = 60, message = "Name must be 20-60 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Initial password (policy enforced server-side).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Postal address.
    #[validate(length(max = 400, message = "Address must be at most 400 characters"))]
    pub address: String,
    /// Role: "admin", "user", or "store_owner".
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Create store request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminCreateStoreRequest {
    /// Store name.
    #[validate(length(min = 20, max = 60, message = "Store name must be 20-60 characters"))]
    pub name: String,
    /// Store address.
    #[validate(length(max = 400, message = "Address must be at most 400 characters"))]
    pub address: String,
    /// The owning user's ID (must have role store_owner).
    pub owner_id: Uuid,
}

/// Submit rating request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    /// The store to rate.
    pub store_id: Uuid,
    /// Rating value.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_value: i32,
}

/// Update rating request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRatingRequest {
    /// New rating value.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_value: i32,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListQuery {
    /// Substring match on name/email/address.
    pub search: Option<String>,
    /// Exact role filter.
    pub role: Option<String>,
}

/// Query parameters for the store listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListQuery {
    /// Substring match on store name.
    pub search: Option<String>,
    /// Substring match on store address.
    pub address: Option<String>,
}
