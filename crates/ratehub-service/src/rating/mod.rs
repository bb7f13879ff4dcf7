//! Rating lifecycle — submit, overwrite, delete.

pub mod service;

pub use service::RatingService;
