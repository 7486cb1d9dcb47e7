//! # Product entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub cost: Option<f64>,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gyms::Entity",
        from = "Column::GymId",
        to = "super::gyms::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Gym,
    #[sea_orm(has_many = "super::product_sales::Entity")]
    ProductSales,
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl Related<super::product_sales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
