//! Rating lifecycle operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::{RatingRepository, StoreRepository};
use ratehub_entity::rating::{CreateRating, Rating};

use crate::context::RequestContext;

/// Handles rating submission, overwriting, and deletion.
#[derive(Debug, Clone)]
pub struct RatingService {
    /// Rating repository.
    rating_repo: Arc<RatingRepository>,
    /// Store repository (existence checks).
    store_repo: Arc<StoreRepository>,
}

impl RatingService {
    /// Creates a new rating service.
    pub fn new(rating_repo: Arc<RatingRepository>, store_repo: Arc<StoreRepository>) -> Self {
        Self {
            rating_repo,
            store_repo,
        }
    }

    /// Submits a first rating for a store.
    ///
    /// Fails with a conflict if the caller already rated this store;
    /// the client must use the update endpoint to overwrite.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        store_id: Uuid,
        rating_value: i32,
    ) -> AppResult<Rating> {
        if self
            .rating_repo
            .find_by_user_and_store(ctx.user_id, store_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "You have already rated this store. Use the update endpoint to change your rating.",
            ));
        }

        self.store_repo
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| AppError::not_found("Store not found"))?;

        let rating = self
            .rating_repo
            .create(&CreateRating {
                user_id: ctx.user_id,
                store_id,
                rating_value,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            store_id = %store_id,
            value = rating_value,
            "Rating submitted"
        );

        Ok(rating)
    }

    /// Overwrites the caller's existing rating of a store.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        store_id: Uuid,
        rating_value: i32,
    ) -> AppResult<Rating> {
        let rating = self
            .rating_repo
            .update_value(ctx.user_id, store_id, rating_value)
            .await?
            .ok_or_else(|| AppError::not_found("Rating not found"))?;

        info!(
            user_id = %ctx.user_id,
            store_id = %store_id,
            value = rating_value,
            "Rating updated"
        );

        Ok(rating)
    }

    /// Deletes the caller's rating of a store.
    pub async fn delete(&self, ctx: &RequestContext, store_id: Uuid) -> AppResult<()> {
        let deleted = self.rating_repo.delete(ctx.user_id, store_id).await?;
        if !deleted {
            return Err(AppError::not_found("Rating not found"));
        }

        info!(user_id = %ctx.user_id, store_id = %store_id, "Rating deleted");

        Ok(())
    }
}
