//! Role guards for route handlers.

use ratehub_core::error::AppError;
use ratehub_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated user is a store owner.
pub fn require_store_owner(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::StoreOwner {
        return Err(AppError::forbidden("Store owner access required"));
    }
    Ok(())
}

/// Checks that the authenticated user is a regular user.
///
/// Only regular users submit ratings; admins and store owners are
/// rejected here.
pub fn require_user(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::User {
        return Err(AppError::forbidden("User access required"));
    }
    Ok(())
}
