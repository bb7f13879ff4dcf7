//! Platform-wide counts for the admin dashboard.

use std::sync::Arc;

use ratehub_core::result::AppResult;
use ratehub_database::repositories::{RatingRepository, StoreRepository, UserRepository};
use ratehub_entity::stats::PlatformStats;

/// Computes platform totals across users, stores, and ratings.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Store repository.
    store_repo: Arc<StoreRepository>,
    /// Rating repository.
    rating_repo: Arc<RatingRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        store_repo: Arc<StoreRepository>,
        rating_repo: Arc<RatingRepository>,
    ) -> Self {
        Self {
            user_repo,
            store_repo,
            rating_repo,
        }
    }

    /// Returns total user, store, and rating counts.
    pub async fn overview(&self) -> AppResult<PlatformStats> {
        let total_users = self.user_repo.count().await?;
        let total_stores = self.store_repo.count().await?;
        let total_ratings = self.rating_repo.count().await?;

        Ok(PlatformStats {
            total_users,
            total_stores,
            total_ratings,
        })
    }
}
