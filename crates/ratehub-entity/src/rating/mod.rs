//! Rating entity and derived read models.

pub mod model;

pub use model::{CreateRating, Rating, RatingWithUser};
