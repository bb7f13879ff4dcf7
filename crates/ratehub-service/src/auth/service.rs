//! Authentication flows — signup, login, password change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use ratehub_auth::jwt::JwtEncoder;
use ratehub_auth::password::{PasswordHasher, PasswordValidator};
use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::{StoreRepository, UserRepository};
use ratehub_entity::store::CreateStore;
use ratehub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Handles account creation and credential verification.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Store repository (for store-owner companion stores).
    store_repo: Arc<StoreRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT encoder.
    encoder: Arc<JwtEncoder>,
}

/// Data required to sign up a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignupData {
    /// Full name.
    pub name: String,
    /// Email (unique).
    pub email: String,
    /// Plaintext password (validated and hashed here).
    pub password: String,
    /// Postal address.
    pub address: String,
    /// Requested role (`user` or `store_owner`).
    pub role: UserRole,
    /// Store name for store owners (falls back to "<name>'s Store").
    pub store_name: Option<String>,
}

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The authenticated user row.
    pub user: User,
    /// Signed bearer token.
    pub token: String,
    /// Token expiration time.
    pub expires_at: DateTime<Utc>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        store_repo: Arc<StoreRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            store_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account and issues a token.
    ///
    /// Store owners also get their companion store created in the same
    /// flow, named after them unless an explicit store name was given.
    pub async fn signup(&self, data: SignupData) -> AppResult<AuthenticatedUser> {
        if data.role == UserRole::Admin {
            return Err(AppError::validation(
                "Signup role must be user or store_owner",
            ));
        }

        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        self.validator.validate(&data.password)?;
        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: data.name.clone(),
                email: data.email.clone(),
                password_hash,
                role: data.role,
                address: data.address.clone(),
            })
            .await?;

        if user.role == UserRole::StoreOwner {
            let store_name = data
                .store_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("{}'s Store", user.name));

            self.store_repo
                .create(&CreateStore {
                    name: store_name,
                    address: user.address.clone(),
                    owner_id: user.id,
                })
                .await?;
        }

        let (token, expires_at) = self
            .encoder
            .generate_token(user.id, &user.email, user.role)?;

        info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "New account registered"
        );

        Ok(AuthenticatedUser {
            user,
            token,
            expires_at,
        })
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let (token, expires_at) = self
            .encoder
            .generate_token(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(AuthenticatedUser {
            user,
            token,
            expires_at,
        })
    }

    /// Changes the current user's password after re-verifying the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let valid = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::validation("Current password is incorrect"));
        }

        self.validator.validate(new_password)?;
        let new_hash = self.hasher.hash_password(new_password)?;

        self.user_repo.update_password(ctx.user_id, &new_hash).await?;

        info!(user_id = %ctx.user_id, "Password changed");

        Ok(())
    }
}
