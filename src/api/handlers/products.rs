//! # Product handlers

use axum::{
    Json,
    extract::{Path, State},
};
use entity::products;

use crate::api::response::ApiResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<products::Model>>> {
    let products = services::products::list_products(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<products::Model>> {
    let product = services::products::get_product(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Success(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<services::products::CreateProductRequest>,
) -> Result<ApiResponse<products::Model>> {
    let product = services::products::create_product(state.db.as_ref(), request).await?;
    Ok(ApiResponse::Created(
        product,
        "Product created successfully.".to_string(),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<services::products::UpdateProductRequest>,
) -> Result<ApiResponse<products::Model>> {
    let product = services::products::update_product(state.db.as_ref(), id, request).await?;
    Ok(ApiResponse::SuccessWithMessage(
        product,
        "Product updated successfully.".to_string(),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>> {
    let name = services::products::delete_product(state.db.as_ref(), id).await?;
    Ok(ApiResponse::Message(format!(
        "Product {name} deleted successfully."
    )))
}

pub async fn product_categories(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<String>>> {
    let categories = services::products::product_categories(state.db.as_ref()).await?;
    Ok(ApiResponse::Success(categories))
}
