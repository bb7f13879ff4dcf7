//! Store browsing and the owner dashboard.

use std::collections::HashMap;
use std::sync::Arc;

use ratehub_core::error::AppError;
use ratehub_core::result::AppResult;
use ratehub_database::repositories::{RatingRepository, StoreRepository};
use ratehub_entity::rating::{Rating, RatingWithUser};
use ratehub_entity::store::{StoreWithOwner, StoreWithRatings};

use crate::context::RequestContext;

/// A store listing entry as seen by the calling user: aggregates plus
/// the caller's own rating, if they have one.
#[derive(Debug, Clone)]
pub struct StoreForUser {
    /// The store with owner identity and rating aggregates.
    pub store: StoreWithOwner,
    /// The caller's existing rating of this store.
    pub user_rating: Option<Rating>,
}

/// Handles store browsing and the owner's dashboard view.
#[derive(Debug, Clone)]
pub struct StoreService {
    /// Store repository.
    store_repo: Arc<StoreRepository>,
    /// Rating repository.
    rating_repo: Arc<RatingRepository>,
}

impl StoreService {
    /// Creates a new store service.
    pub fn new(store_repo: Arc<StoreRepository>, rating_repo: Arc<RatingRepository>) -> Self {
        Self {
            store_repo,
            rating_repo,
        }
    }

    /// Searches stores by name/address substring and merges in the
    /// caller's own ratings.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        name: Option<&str>,
        address: Option<&str>,
    ) -> AppResult<Vec<StoreForUser>> {
        let stores = self.store_repo.search_with_owner(name, address).await?;
        let own_ratings = self.rating_repo.find_by_user(ctx.user_id).await?;

        let mut by_store: HashMap<_, _> = own_ratings
            .into_iter()
            .map(|r| (r.store_id, r))
            .collect();

        Ok(stores
            .into_iter()
            .map(|store| {
                let user_rating = by_store.remove(&store.store.id);
                StoreForUser { store, user_rating }
            })
            .collect())
    }

    /// Returns the calling store owner's store with all its ratings
    /// and the computed average.
    pub async fn my_store(&self, ctx: &RequestContext) -> AppResult<StoreWithRatings> {
        let store = self
            .store_repo
            .find_by_owner(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Store not found"))?;

        let ratings = self.rating_repo.find_by_store_with_user(store.id).await?;
        let average_rating = average(&ratings);

        Ok(StoreWithRatings {
            store,
            ratings,
            average_rating,
        })
    }
}

/// Arithmetic mean of the rating values, 0.0 when there are none.
fn average(ratings: &[RatingWithUser]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(r.rating.rating_value)).sum();
    sum as f64 / ratings.len() as f64
}
