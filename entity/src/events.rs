//! # Event entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime,
    pub ends_at: Option<DateTime>,
    /// Polymorphic organizer reference.
    pub organizer_role: Option<StaffRole>,
    pub organizer_id: Option<i32>,
    pub created_at: DateTime,
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
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
