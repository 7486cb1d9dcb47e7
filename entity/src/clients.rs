//! # Client entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gym_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub phone: String,
    pub birth_date: Option<Date>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub join_date: Date,
    pub notes: Option<String>,
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
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::class_registrations::Entity")]
    ClassRegistrations,
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

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::class_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Display name used in list projections and confirmation messages.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
