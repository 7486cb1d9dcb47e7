//! # HTTP API
//!
//! Server assembly, routing, middleware and the handler/service split.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod services;

pub use server::{ApiServer, AppState};
