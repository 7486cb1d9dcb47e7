//! # Gym class entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gym_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    /// Assigned trainer; nulled when the trainer is deleted.
    pub trainer_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub duration_minutes: i32,
    /// Display color for the dashboard calendar.
    pub color: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::trainers::Entity",
        from = "Column::TrainerId",
        to = "super::trainers::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Trainer,
    #[sea_orm(has_many = "super::class_sessions::Entity")]
    ClassSessions,
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl Related<super::trainers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl Related<super::class_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
