//! # Business logic services
//!
//! One module per resource family. Services operate on a plain
//! [`sea_orm::DatabaseConnection`] so tests can drive them directly against
//! an in-memory database.

pub mod auth;
pub mod classes;
pub mod clients;
pub mod products;
pub mod reports;
pub mod staff;
