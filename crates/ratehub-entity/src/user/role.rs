//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in RateHub.
///
/// Each role unlocks a distinct slice of the API: admins manage
/// accounts and stores, users submit ratings, store owners see the
/// feedback on their single store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Regular user who browses and rates stores.
    User,
    /// Owner of exactly one store.
    StoreOwner,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a regular user.
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Check if this role is a store owner.
    pub fn is_store_owner(&self) -> bool {
        matches!(self, Self::StoreOwner)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::StoreOwner => "store_owner",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ratehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "store_owner" => Ok(Self::StoreOwner),
            _ => Err(ratehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, user, store_owner"
            ))),
        }
    }
}
