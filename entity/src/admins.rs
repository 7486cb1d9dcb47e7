//! # Admin (owner) entity definition
//!
//! One of the three disjoint staff identity tables. Email uniqueness is a
//! per-table constraint; cross-table uniqueness is enforced in the staff
//! mutation paths.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime>,
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
}

impl Related<super::gyms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gym.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
