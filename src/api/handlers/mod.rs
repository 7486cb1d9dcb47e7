//! # HTTP handlers
//!
//! Thin axum extractors per resource family; all decisions live in the
//! matching service module.

pub mod auth;
pub mod classes;
pub mod clients;
pub mod products;
pub mod reports;
pub mod staff;
