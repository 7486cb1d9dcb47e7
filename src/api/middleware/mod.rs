//! # HTTP middleware

pub mod auth;

pub use auth::{AuthContext, authenticate, require_role};
