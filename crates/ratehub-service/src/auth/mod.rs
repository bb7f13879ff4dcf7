//! Signup, login, and password-change flows.

pub mod service;

pub use service::{AuthService, AuthenticatedUser, SignupData};
