//! # Equipment entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub purchase_date: Option<Date>,
    pub purchase_price: Option<f64>,
    pub condition: Option<String>,
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
    #[sea_orm(has_many = "super::equipment_maintenance::Entity")]
    Maintenance,
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl Related<super::equipment_maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
