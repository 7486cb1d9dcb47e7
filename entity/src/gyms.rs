//! # Gym entity definition
//!
//! The organization tenant owning every other record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gyms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admins::Entity")]
    Admins,
    #[sea_orm(has_many = "super::trainers::Entity")]
    Trainers,
    #[sea_orm(has_many = "super::secretaries::Entity")]
    Secretaries,
    #[sea_orm(has_many = "super::clients::Entity")]
    Clients,
    #[sea_orm(has_many = "super::membership_plans::Entity")]
    MembershipPlans,
    #[sea_orm(has_many = "super::gym_classes::Entity")]
    GymClasses,
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
}

impl Related<super::admins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admins.def()
    }
}

impl Related<super::trainers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainers.def()
    }
}

impl Related<super::secretaries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Secretaries.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl Related<super::membership_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MembershipPlans.def()
    }
}

impl Related<super::gym_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GymClasses.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
