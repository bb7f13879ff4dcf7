//! # ratehub-entity
//!
//! Domain entity models for RateHub. Every struct in this crate
//! represents a database table row or a derived read model. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod rating;
pub mod stats;
pub mod store;
pub mod user;
