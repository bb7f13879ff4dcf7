//! Store entity and derived read models.

pub mod model;

pub use model::{CreateStore, Store, StoreWithOwner, StoreWithRatings};
