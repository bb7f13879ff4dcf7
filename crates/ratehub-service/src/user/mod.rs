//! User self-service and administrative user management.

pub mod admin;
pub mod service;

pub use admin::{AdminCreateUser, AdminUserService};
pub use service::UserService;
