//! Store browsing, the owner dashboard, and administrative store management.

pub mod admin;
pub mod service;

pub use admin::{AdminCreateStore, AdminStoreService};
pub use service::{StoreForUser, StoreService};
