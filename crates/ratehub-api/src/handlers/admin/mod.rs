//! Admin-only handlers.

pub mod stats;
pub mod stores;
pub mod users;
