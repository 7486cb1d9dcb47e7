//! # Membership plan entity definition
//!
//! Template entity: purchased memberships snapshot their dates from it, so a
//! later plan edit never rewrites historical membership rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "membership_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_days: i32,
    /// JSON-encoded feature flags.
    pub features: Option<String>,
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
    #[sea_orm(has_many = "super::client_memberships::Entity")]
    ClientMemberships,
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl Related<super::client_memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientMemberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
