//! # Authentication handlers

use std::sync::Arc;

use axum::{Extension, Json, extract::State};

use crate::api::middleware::AuthContext;
use crate::api::response::ApiResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<services::auth::LoginRequest>,
) -> Result<ApiResponse<services::auth::TokenResponse>> {
    let response = services::auth::login(state.db.as_ref(), &state.jwt, request).await?;
    Ok(ApiResponse::Success(response))
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<services::auth::RegisterRequest>,
) -> Result<ApiResponse<services::auth::TokenResponse>> {
    let response = services::auth::register(state.db.as_ref(), &state.jwt, request).await?;
    Ok(ApiResponse::Created(
        response,
        "Registered successfully.".to_string(),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(context): Extension<Arc<AuthContext>>,
) -> Result<ApiResponse<()>> {
    services::auth::logout(state.db.as_ref(), &context.jti).await?;
    Ok(ApiResponse::Message("Logged out successfully.".to_string()))
}

pub async fn current_user(
    State(state): State<AppState>,
    Extension(context): Extension<Arc<AuthContext>>,
) -> Result<ApiResponse<services::auth::CurrentUserResponse>> {
    let response =
        services::auth::current_user(state.db.as_ref(), context.role, context.actor_id).await?;
    Ok(ApiResponse::Success(response))
}
