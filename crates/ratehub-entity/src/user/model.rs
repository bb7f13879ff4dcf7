//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use crate::store::Store;

/// A registered account in the RateHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name (20-60 characters).
    pub name: String,
    /// Email address (unique, used for login).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Postal address (up to 400 characters).
    pub address: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Postal address.
    pub address: String,
}

/// A user together with the store they own, if any.
///
/// Only store owners ever carry a store; for everyone else the field
/// is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithStore {
    /// The user row.
    pub user: User,
    /// The store owned by this user.
    pub owned_store: Option<Store>,
}
