//! # Client handlers
//!
//! Shared by the owner and front-desk route groups; mutations record the
//! caller as the membership's creator.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use entity::ActorRef;

use crate::api::middleware::AuthContext;
use crate::api::response::ApiResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<services::clients::ClientSummary>>> {
    let clients = services::clients::list_clients(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(clients))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<services::clients::ClientDetail>> {
    let client = services::clients::get_client(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Success(client))
}

pub async fn create_client(
    State(state): State<AppState>,
    Extension(context): Extension<Arc<AuthContext>>,
    Json(request): Json<services::clients::CreateClientRequest>,
) -> Result<ApiResponse<services::clients::ClientDetail>> {
    let actor = ActorRef::new(context.role, context.actor_id);
    let client = services::clients::create_client(state.db.as_ref(), request, actor).await?;
    Ok(ApiResponse::Created(
        client,
        "Client created successfully.".to_string(),
    ))
}

pub async fn update_client(
    State(state): State<AppState>,
    Extension(context): Extension<Arc<AuthContext>>,
    Path(id): Path<i32>,
    Json(request): Json<services::clients::UpdateClientRequest>,
) -> Result<ApiResponse<services::clients::ClientDetail>> {
    let actor = ActorRef::new(context.role, context.actor_id);
    let client = services::clients::update_client(state.db.as_ref(), id, request, actor).await?;
    Ok(ApiResponse::SuccessWithMessage(
        client,
        "Client updated successfully.".to_string(),
    ))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>> {
    let name = services::clients::delete_client(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Message(format!(
        "Client {name} deleted successfully."
    )))
}

pub async fn list_membership_plans(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<services::clients::PlanResponse>>> {
    let plans = services::clients::list_membership_plans(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(plans))
}
