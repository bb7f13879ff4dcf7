//! User self-service operations — profile viewing and updating.

use std::sync::Arc;

use tracing::info;

use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::UserRepository;
use ratehub_entity::user::User;

use crate::context::RequestContext;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's name and address.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        name: &str,
        address: &str,
    ) -> AppResult<User> {
        let user = self
            .user_repo
            .update_profile(ctx.user_id, name, address)
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(user)
    }
}
