//! # Route configuration
//!
//! Route groups and their role gates: `/admin/*` is owner-only, `/coach/*`
//! trainer-only and `/secretary/*` frontdesk-only.

use axum::Router;
use axum::middleware::from_fn;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use entity::StaffRole;

use super::handlers;
use super::middleware::{authenticate, require_role};
use super::server::AppState;

/// Create all routes.
pub fn create_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/register", post(handlers::auth::register));

    let protected = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/user", get(handlers::auth::current_user))
        .nest(
            "/admin",
            admin_routes().route_layer(from_fn(|req, next| {
                require_role(StaffRole::Owner, req, next)
            })),
        )
        .nest(
            "/coach",
            coach_routes().route_layer(from_fn(|req, next| {
                require_role(StaffRole::Trainer, req, next)
            })),
        )
        .nest(
            "/secretary",
            secretary_routes().route_layer(from_fn(|req, next| {
                require_role(StaffRole::FrontDesk, req, next)
            })),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new().merge(public).merge(protected).with_state(state)
}

/// Owner-scoped management routes.
fn admin_routes() -> Router<AppState> {
    Router::new()
        // staff
        .route("/staff", get(handlers::staff::list_staff))
        .route("/staff", post(handlers::staff::create_staff))
        .route("/staff/{id}", put(handlers::staff::update_staff))
        .route("/staff/{id}", delete(handlers::staff::delete_staff))
        // clients
        .route("/clients", get(handlers::clients::list_clients))
        .route("/clients", post(handlers::clients::create_client))
        .route("/clients/{id}", get(handlers::clients::get_client))
        .route("/clients/{id}", put(handlers::clients::update_client))
        .route("/clients/{id}", delete(handlers::clients::delete_client))
        .route(
            "/membership-plans",
            get(handlers::clients::list_membership_plans),
        )
        // classes
        .route("/classes", get(handlers::classes::list_classes))
        .route("/classes", post(handlers::classes::create_class))
        .route("/classes/{id}", get(handlers::classes::get_class))
        .route("/classes/{id}", put(handlers::classes::update_class))
        .route("/classes/{id}", delete(handlers::classes::delete_class))
        .route("/coaches-list", get(handlers::classes::coaches_list))
        // products
        .route("/products", get(handlers::products::list_products))
        .route("/products", post(handlers::products::create_product))
        .route("/products/{id}", get(handlers::products::get_product))
        .route("/products/{id}", put(handlers::products::update_product))
        .route("/products/{id}", delete(handlers::products::delete_product))
        .route(
            "/product-categories",
            get(handlers::products::product_categories),
        )
        // reporting (legacy envelope)
        .route(
            "/reports/financial-summary",
            get(handlers::reports::financial_summary),
        )
        .route(
            "/reports/membership-distribution",
            get(handlers::reports::membership_distribution),
        )
}

/// Trainer-scoped routes.
fn coach_routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(handlers::classes::list_classes))
        .route("/classes/{id}", get(handlers::classes::get_class))
}

/// Front-desk-scoped routes.
fn secretary_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(handlers::clients::list_clients))
        .route("/clients", post(handlers::clients::create_client))
        .route("/clients/{id}", get(handlers::clients::get_client))
        .route("/clients/{id}", put(handlers::clients::update_client))
        .route(
            "/membership-plans",
            get(handlers::clients::list_membership_plans),
        )
        .route("/products", get(handlers::products::list_products))
}
