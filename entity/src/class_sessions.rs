//! # Class session entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_id: i32,
    pub starts_at: DateTime,
    pub ends_at: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gym_classes::Entity",
        from = "Column::ClassId",
        to = "super::gym_classes::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GymClass,
    #[sea_orm(has_many = "super::class_registrations::Entity")]
    ClassRegistrations,
}

impl Related<super::gym_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GymClass.def()
    }
}

impl Related<super::class_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
