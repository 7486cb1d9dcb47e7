//! # Equipment maintenance entity definition

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment_maintenance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub equipment_id: i32,
    pub description: String,
    pub cost: Option<f64>,
    /// Polymorphic reference to whoever performed the work.
    pub performed_by_role: Option<StaffRole>,
    pub performed_by_id: Option<i32>,
    pub performed_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Equipment,
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
