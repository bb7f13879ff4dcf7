//! Admin user management — listing, creation, deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ratehub_auth::password::{PasswordHasher, PasswordValidator};
use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::UserRepository;
use ratehub_entity::user::{CreateUser, User, UserRole, UserWithStore};

use crate::context::RequestContext;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

/// Request to create a new user as an admin.
///
/// Unlike signup, any role can be assigned, and no companion store is
/// created for store owners — the store is registered separately.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdminCreateUser {
    /// Full name.
    pub name: String,
    /// Email (unique).
    pub email: String,
    /// Initial plaintext password.
    pub password: String,
    /// Postal address.
    pub address: String,
    /// Role assignment.
    pub role: UserRole,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Lists all users with their owned store, optionally filtered.
    pub async fn list_users(
        &self,
        search: Option<&str>,
        role: Option<UserRole>,
    ) -> AppResult<Vec<UserWithStore>> {
        self.user_repo.find_all_with_store(search, role).await
    }

    /// Creates a new user with any role.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        req: AdminCreateUser,
    ) -> AppResult<User> {
        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name,
                email: req.email,
                password_hash,
                role: req.role,
                address: req.address,
            })
            .await?;

        info!(
            admin_id = %ctx.user_id,
            new_user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "User created by admin"
        );

        Ok(user)
    }

    /// Deletes a user. Their owned store and ratings cascade away.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<()> {
        if user_id == ctx.user_id {
            return Err(AppError::forbidden("Cannot delete your own account"));
        }

        let deleted = self.user_repo.delete(user_id).await?;
        if !deleted {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %ctx.user_id, target_id = %user_id, "User deleted");

        Ok(())
    }
}
