//! # Staff handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::response::ApiResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<services::staff::StaffResponse>>> {
    let staff = services::staff::list_staff(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(staff))
}

pub async fn create_staff(
    State(state): State<AppState>,
    Json(request): Json<services::staff::CreateStaffRequest>,
) -> Result<ApiResponse<services::staff::StaffResponse>> {
    let staff = services::staff::create_staff(state.db.as_ref(), request).await?;
    Ok(ApiResponse::Created(
        staff,
        "Staff member created successfully.".to_string(),
    ))
}

pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<services::staff::UpdateStaffRequest>,
) -> Result<ApiResponse<services::staff::StaffResponse>> {
    let staff = services::staff::update_staff(state.db.as_ref(), id, request).await?;
    Ok(ApiResponse::SuccessWithMessage(
        staff,
        "Staff member updated successfully.".to_string(),
    ))
}

pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<services::staff::DeleteStaffRequest>,
) -> Result<ApiResponse<()>> {
    let name = services::staff::delete_staff(state.db.as_ref(), id, request).await?;
    Ok(ApiResponse::Message(format!(
        "Staff member {name} deleted successfully."
    )))
}
