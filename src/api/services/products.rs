//! # Product service
//!
//! Inventory CRUD and the distinct-category listing used by the sales form.

use entity::{gyms::Entity as Gyms, products, products::Entity as Products};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;

use crate::error::{FieldErrors, Result};
use crate::not_found;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub gym_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// List all products.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<products::Model>> {
    Ok(Products::find()
        .order_by_asc(products::Column::Name)
        .all(db)
        .await?)
}

/// Fetch one product.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<products::Model> {
    Products::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("product"))
}

/// Create a product.
pub async fn create_product(
    db: &DatabaseConnection,
    request: CreateProductRequest,
) -> Result<products::Model> {
    let mut errors = FieldErrors::new();
    let name = errors
        .require("name", request.name.as_deref())
        .map(str::to_string);
    if request.price.is_none() {
        errors.add("price", "The price field is required.");
    } else if request.price.is_some_and(|p| p < 0.0) {
        errors.add("price", "The price must be at least 0.");
    }
    if request.stock_quantity.is_some_and(|q| q < 0) {
        errors.add("stock_quantity", "The stock_quantity must be at least 0.");
    }
    let gym_id = match request.gym_id {
        Some(id) => {
            if Gyms::find_by_id(id).one(db).await?.is_none() {
                errors.add("gym_id", "The selected gym is invalid.");
            }
            Some(id)
        }
        None => {
            errors.add("gym_id", "The gym_id field is required.");
            None
        }
    };
    errors.into_result()?;

    let now = chrono::Utc::now().naive_utc();
    let product = products::ActiveModel {
        gym_id: Set(gym_id.unwrap()),
        name: Set(name.unwrap()),
        description: Set(request.description),
        price: Set(request.price.unwrap()),
        cost: Set(request.cost),
        stock_quantity: Set(request.stock_quantity.unwrap_or(0)),
        category: Set(request.category),
        image_url: Set(request.image_url),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(product)
}

/// Partially update a product.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    request: UpdateProductRequest,
) -> Result<products::Model> {
    let product = Products::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("product"))?;

    let mut errors = FieldErrors::new();
    if request.price.is_some_and(|p| p < 0.0) {
        errors.add("price", "The price must be at least 0.");
    }
    if request.stock_quantity.is_some_and(|q| q < 0) {
        errors.add("stock_quantity", "The stock_quantity must be at least 0.");
    }
    errors.into_result()?;

    let mut active: products::ActiveModel = product.into();
    if let Some(v) = request.name {
        active.name = Set(v);
    }
    if let Some(v) = request.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = request.price {
        active.price = Set(v);
    }
    if let Some(v) = request.cost {
        active.cost = Set(Some(v));
    }
    if let Some(v) = request.stock_quantity {
        active.stock_quantity = Set(v);
    }
    if let Some(v) = request.category {
        active.category = Set(Some(v));
    }
    if let Some(v) = request.image_url {
        active.image_url = Set(Some(v));
    }
    if let Some(v) = request.is_active {
        active.is_active = Set(v);
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    Ok(active.update(db).await?)
}

/// Delete a product; its sale rows cascade.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<String> {
    let product = Products::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("product"))?;
    let name = product.name.clone();
    product.delete(db).await?;
    Ok(name)
}

/// Distinct non-null categories in use.
pub async fn product_categories(db: &DatabaseConnection) -> Result<Vec<String>> {
    let categories: Vec<Option<String>> = Products::find()
        .select_only()
        .column(products::Column::Category)
        .distinct()
        .order_by_asc(products::Column::Category)
        .into_tuple()
        .all(db)
        .await?;

    Ok(categories.into_iter().flatten().collect())
}
