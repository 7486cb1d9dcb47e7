//! # Client membership entity definition
//!
//! Links one client to one plan at a point in time. A client accumulates rows
//! as history; "the current membership" is never stored, it is derived at read
//! time as the `active` row with the latest `end_date`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

/// Membership lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "paused")]
    Paused,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_memberships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub plan_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub status: MembershipStatus,
    pub auto_renew: bool,
    pub payment_method: String,
    /// Polymorphic creator reference: role discriminator + id.
    pub created_by_role: Option<StaffRole>,
    pub created_by_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::membership_plans::Entity",
        from = "Column::PlanId",
        to = "super::membership_plans::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Plan,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::membership_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
