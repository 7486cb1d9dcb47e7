//! # Class handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::response::ApiResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<services::classes::ClassResponse>>> {
    let classes = services::classes::list_classes(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(classes))
}

pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<services::classes::ClassResponse>> {
    let class = services::classes::get_class(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Success(class))
}

pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<services::classes::CreateClassRequest>,
) -> Result<ApiResponse<services::classes::ClassResponse>> {
    let class = services::classes::create_class(state.db.as_ref(), request).await?;
    Ok(ApiResponse::Created(
        class,
        "Class created successfully.".to_string(),
    ))
}

pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<services::classes::UpdateClassRequest>,
) -> Result<ApiResponse<services::classes::ClassResponse>> {
    let class = services::classes::update_class(state.db.as_ref(), id, request).await?;
    Ok(ApiResponse::SuccessWithMessage(
        class,
        "Class updated successfully.".to_string(),
    ))
}

pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>> {
    let name = services::classes::delete_class(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Message(format!(
        "Class {name} deleted successfully."
    )))
}

pub async fn coaches_list(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<services::classes::CoachOption>>> {
    let coaches = services::classes::coaches_list(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(coaches))
}
