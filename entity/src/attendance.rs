//! # Attendance entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub checked_in_at: DateTime,
    pub checked_out_at: Option<DateTime>,
    /// Polymorphic reference to whoever recorded the visit.
    pub recorded_by_role: Option<StaffRole>,
    pub recorded_by_id: Option<i32>,
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
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
