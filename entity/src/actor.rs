//! # Staff roles and polymorphic actor references
//!
//! The three staff identity tables (admins, trainers, secretaries) are disjoint,
//! so "who did this" columns cannot be a plain foreign key. They store a role
//! discriminator plus an id and are resolved against the table the discriminator
//! names at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The closed set of staff identity variants.
///
/// The string values double as the `user_type` wire values accepted by the
/// login endpoint and as the discriminator stored in polymorphic actor columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Gym owner / administrator.
    #[sea_orm(string_value = "owner")]
    #[serde(rename = "owner")]
    Owner,
    /// Trainer / coach.
    #[sea_orm(string_value = "trainer")]
    #[serde(rename = "trainer")]
    Trainer,
    /// Front-desk secretary.
    #[sea_orm(string_value = "frontdesk")]
    #[serde(rename = "frontdesk")]
    FrontDesk,
}

impl StaffRole {
    /// Wire representation, identical to the stored discriminator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Trainer => "trainer",
            Self::FrontDesk => "frontdesk",
        }
    }

    /// Parse a wire/user-supplied role string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "owner" | "admin" => Some(Self::Owner),
            "trainer" | "coach" => Some(Self::Trainer),
            "frontdesk" | "secretary" => Some(Self::FrontDesk),
            _ => None,
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved `(role, id)` pair pointing into one of the staff identity tables.
///
/// Lookup-only: never an ownership relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    pub role: StaffRole,
    pub id: i32,
}

impl ActorRef {
    #[must_use]
    pub const fn new(role: StaffRole, id: i32) -> Self {
        Self { role, id }
    }

    /// Rebuild from a stored discriminator/id column pair.
    #[must_use]
    pub fn from_columns(role: Option<StaffRole>, id: Option<i32>) -> Option<Self> {
        Some(Self {
            role: role?,
            id: id?,
        })
    }
}
