//! # Gym management API
//!
//! Multi-role backend for a gym dashboard: three disjoint staff identity
//! tables (owner, trainer, front desk), role-scoped bearer tokens with a
//! revocation registry, and CRUD for clients, classes and products on top of
//! SQLite via SeaORM.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{AppError, Result};
