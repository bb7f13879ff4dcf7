//! Admin store management — listing, creation, deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::{StoreRepository, UserRepository};
use ratehub_entity::store::{CreateStore, Store, StoreWithOwner};
use ratehub_entity::user::UserRole;

use crate::context::RequestContext;

/// Handles administrative store management operations.
#[derive(Debug, Clone)]
pub struct AdminStoreService {
    /// Store repository.
    store_repo: Arc<StoreRepository>,
    /// User repository (owner checks).
    user_repo: Arc<UserRepository>,
}

/// Request to register a store for an existing store owner.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdminCreateStore {
    /// Store name.
    pub name: String,
    /// Store address.
    pub address: String,
    /// The owning user's ID.
    pub owner_id: Uuid,
}

impl AdminStoreService {
    /// Creates a new admin store service.
    pub fn new(store_repo: Arc<StoreRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            store_repo,
            user_repo,
        }
    }

    /// Lists all stores with owner identity and rating aggregates.
    pub async fn list_stores(&self) -> AppResult<Vec<StoreWithOwner>> {
        self.store_repo.search_with_owner(None, None).await
    }

    /// Registers a store for an existing user.
    ///
    /// The target user must exist, have role `store_owner`, and not
    /// already own a store.
    pub async fn create_store(
        &self,
        ctx: &RequestContext,
        req: AdminCreateStore,
    ) -> AppResult<Store> {
        let owner = self
            .user_repo
            .find_by_id(req.owner_id)
            .await?
            .ok_or_else(|| AppError::validation("Store owner not found"))?;

        if owner.role != UserRole::StoreOwner {
            return Err(AppError::validation("User must be a store owner"));
        }

        if self
            .store_repo
            .find_by_owner(req.owner_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Store owner already has a store"));
        }

        let store = self
            .store_repo
            .create(&CreateStore {
                name: req.name,
                address: req.address,
                owner_id: req.owner_id,
            })
            .await?;

        info!(
            admin_id = %ctx.user_id,
            store_id = %store.id,
            owner_id = %store.owner_id,
            "Store created by admin"
        );

        Ok(store)
    }

    /// Deletes a store. Its ratings cascade away.
    pub async fn delete_store(&self, ctx: &RequestContext, store_id: Uuid) -> AppResult<()> {
        let deleted = self.store_repo.delete(store_id).await?;
        if !deleted {
            return Err(AppError::not_found("Store not found"));
        }

        info!(admin_id = %ctx.user_id, store_id = %store_id, "Store deleted");

        Ok(())
    }
}
