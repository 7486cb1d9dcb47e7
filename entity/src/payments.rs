//! # Payment tracking entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    /// The membership the payment was for, if any; survives membership deletion.
    pub membership_id: Option<i32>,
    pub amount: f64,
    pub method: String,
    /// Polymorphic reference to whoever recorded the payment.
    pub recorded_by_role: Option<StaffRole>,
    pub recorded_by_id: Option<i32>,
    pub paid_at: DateTime,
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
        belongs_to = "super::client_memberships::Entity",
        from = "Column::MembershipId",
        to = "super::client_memberships::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Membership,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::client_memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
