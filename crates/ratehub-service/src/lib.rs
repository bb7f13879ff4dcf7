//! # ratehub-service
//!
//! Business logic for RateHub. Services receive `Arc`-wrapped
//! repositories and auth primitives, take an explicit [`context::RequestContext`]
//! for every authenticated operation, and return domain entities.
//! HTTP concerns live one layer up in `ratehub-api`.

pub mod auth;
pub mod context;
pub mod rating;
pub mod report;
pub mod store;
pub mod user;

pub use context::RequestContext;
