//! # Access token entity definition
//!
//! Registry of issued bearer tokens, keyed by JWT `jti`. Deleting a row
//! revokes exactly that token; other tokens of the same identity stay valid.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::StaffRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "access_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub jti: String,
    pub actor_role: StaffRole,
    pub actor_id: i32,
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
