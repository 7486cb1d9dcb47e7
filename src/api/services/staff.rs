//! # Staff service
//!
//! The trainer and front-desk identity tables act as one conceptual "staff"
//! collection. Ids are only unique per table, so every id-addressed mutation
//! also needs the role to know which table to look in. Email uniqueness is
//! enforced across both tables (and the admins table) on create *and* update.

use chrono::Utc;
use entity::{
    StaffRole, admins, admins::Entity as Admins, gyms::Entity as Gyms, secretaries,
    secretaries::Entity as Secretaries, trainers, trainers::Entity as Trainers,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::auth::hash_password;
use crate::error::{AppError, FieldErrors, Result};
use crate::not_found;

/// Create staff request.
#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub gym_id: Option<i32>,
    /// Trainer-specific.
    pub specialization: Option<String>,
    /// Front-desk-specific.
    pub shift_schedule: Option<String>,
}

/// Update staff request. `role` selects the table; it is not updatable.
#[derive(Debug, Deserialize)]
pub struct UpdateStaffRequest {
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Empty or absent means "keep the stored credential".
    pub password: Option<String>,
    pub specialization: Option<String>,
    pub shift_schedule: Option<String>,
    pub is_active: Option<bool>,
}

/// Delete staff request body: the id alone cannot locate the record.
#[derive(Debug, Deserialize)]
pub struct DeleteStaffRequest {
    pub role: Option<String>,
}

/// Common staff projection across both tables.
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub specialization: Option<String>,
    pub shift_schedule: Option<String>,
    pub is_active: bool,
}

impl From<trainers::Model> for StaffResponse {
    fn from(t: trainers::Model) -> Self {
        Self {
            id: t.id,
            first_name: t.first_name,
            last_name: t.last_name,
            email: t.email,
            phone: t.phone,
            role: StaffRole::Trainer,
            specialization: t.specialization,
            shift_schedule: None,
            is_active: t.is_active,
        }
    }
}

impl From<secretaries::Model> for StaffResponse {
    fn from(s: secretaries::Model) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            phone: s.phone,
            role: StaffRole::FrontDesk,
            specialization: None,
            shift_schedule: s.shift_schedule,
            is_active: s.is_active,
        }
    }
}

/// Merge the trainer and front-desk tables into one listing, tagged by role.
pub async fn list_staff(db: &DatabaseConnection) -> Result<Vec<StaffResponse>> {
    let trainers = Trainers::find()
        .order_by_asc(trainers::Column::Id)
        .all(db)
        .await?;
    let secretaries = Secretaries::find()
        .order_by_asc(secretaries::Column::Id)
        .all(db)
        .await?;

    Ok(trainers
        .into_iter()
        .map(StaffResponse::from)
        .chain(secretaries.into_iter().map(StaffResponse::from))
        .collect())
}

/// Does the email exist in any staff identity table, excluding at most one
/// record (the one being updated)?
async fn email_taken(
    db: &DatabaseConnection,
    email: &str,
    exclude: Option<(StaffRole, i32)>,
) -> Result<bool> {
    let mut trainer_query = Trainers::find().filter(trainers::Column::Email.eq(email));
    if let Some((StaffRole::Trainer, id)) = exclude {
        trainer_query = trainer_query.filter(trainers::Column::Id.ne(id));
    }
    if trainer_query.one(db).await?.is_some() {
        return Ok(true);
    }

    let mut secretary_query = Secretaries::find().filter(secretaries::Column::Email.eq(email));
    if let Some((StaffRole::FrontDesk, id)) = exclude {
        secretary_query = secretary_query.filter(secretaries::Column::Id.ne(id));
    }
    if secretary_query.one(db).await?.is_some() {
        return Ok(true);
    }

    let mut admin_query = Admins::find().filter(admins::Column::Email.eq(email));
    if let Some((StaffRole::Owner, id)) = exclude {
        admin_query = admin_query.filter(admins::Column::Id.ne(id));
    }
    Ok(admin_query.one(db).await?.is_some())
}

fn parse_staff_role(raw: Option<&str>, errors: &mut FieldErrors) -> Option<StaffRole> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.add("role", "The role field is required.");
            None
        }
        Some(value) => match StaffRole::parse(value) {
            Some(StaffRole::Owner) | None => {
                errors.add("role", "The role must be Trainer or FrontDesk.");
                None
            }
            Some(role) => Some(role),
        },
    }
}

/// Create a trainer or front-desk identity.
pub async fn create_staff(
    db: &DatabaseConnection,
    request: CreateStaffRequest,
) -> Result<StaffResponse> {
    let mut errors = FieldErrors::new();
    let role = parse_staff_role(request.role.as_deref(), &mut errors);
    let first_name = errors
        .require("first_name", request.first_name.as_deref())
        .map(str::to_string);
    let last_name = errors
        .require("last_name", request.last_name.as_deref())
        .map(str::to_string);
    let email = errors
        .require("email", request.email.as_deref())
        .map(str::to_string);
    let password = errors
        .require("password", request.password.as_deref())
        .map(str::to_string);

    let gym_id = match request.gym_id {
        Some(id) => {
            if Gyms::find_by_id(id).one(db).await?.is_none() {
                errors.add("gym_id", "The selected gym is invalid.");
            }
            Some(id)
        }
        None => {
            errors.add("gym_id", "The gym_id field is required.");
            None
        }
    };

    // Cross-variant policy: one email, one role, regardless of which role is
    // being created.
    if let Some(email) = email.as_deref()
        && !errors.contains("email")
        && email_taken(db, email, None).await?
    {
        errors.add("email", "The email has already been taken.");
    }
    errors.into_result()?;

    let (role, first_name, last_name, email, password, gym_id) = (
        role.unwrap(),
        first_name.unwrap(),
        last_name.unwrap(),
        email.unwrap(),
        password.unwrap(),
        gym_id.unwrap(),
    );

    let password_hash = hash_password(&password)?;
    let now = Utc::now().naive_utc();
    let today = Utc::now().date_naive();

    match role {
        StaffRole::Trainer => {
            let trainer = trainers::ActiveModel {
                gym_id: Set(gym_id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email),
                phone: Set(request.phone),
                password_hash: Set(password_hash),
                specialization: Set(request.specialization),
                hire_date: Set(today),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            Ok(trainer.into())
        }
        StaffRole::FrontDesk => {
            let secretary = secretaries::ActiveModel {
                gym_id: Set(gym_id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email),
                phone: Set(request.phone),
                password_hash: Set(password_hash),
                shift_schedule: Set(request.shift_schedule),
                hire_date: Set(today),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            Ok(secretary.into())
        }
        StaffRole::Owner => unreachable!("rejected during validation"),
    }
}

/// Update a staff record located by `(role, id)`.
pub async fn update_staff(
    db: &DatabaseConnection,
    id: i32,
    request: UpdateStaffRequest,
) -> Result<StaffResponse> {
    let mut errors = FieldErrors::new();
    let role = parse_staff_role(request.role.as_deref(), &mut errors);
    errors.into_result()?;
    let role = role.unwrap();

    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    // The source only checked cross-table uniqueness on create; the update
    // path checks it too.
    if let Some(email) = email
        && email_taken(db, email, Some((role, id))).await?
    {
        return Err(AppError::field("email", "The email has already been taken."));
    }

    let password_hash = match request.password.as_deref() {
        // Empty means "no change".
        None | Some("") => None,
        Some(plaintext) => Some(hash_password(plaintext)?),
    };

    let now = Utc::now().naive_utc();

    match role {
        StaffRole::Trainer => {
            let trainer = Trainers::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| not_found!("staff member"))?;
            let mut active: trainers::ActiveModel = trainer.into();
            if let Some(v) = request.first_name {
                active.first_name = Set(v);
            }
            if let Some(v) = request.last_name {
                active.last_name = Set(v);
            }
            if let Some(v) = email {
                active.email = Set(v.to_string());
            }
            if let Some(v) = request.phone {
                active.phone = Set(Some(v));
            }
            if let Some(v) = request.specialization {
                active.specialization = Set(Some(v));
            }
            if let Some(v) = request.is_active {
                active.is_active = Set(v);
            }
            if let Some(hash) = password_hash {
                active.password_hash = Set(hash);
            }
            active.updated_at = Set(now);
            Ok(active.update(db).await?.into())
        }
        StaffRole::FrontDesk => {
            let secretary = Secretaries::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| not_found!("staff member"))?;
            let mut active: secretaries::ActiveModel = secretary.into();
            if let Some(v) = request.first_name {
                active.first_name = Set(v);
            }
            if let Some(v) = request.last_name {
                active.last_name = Set(v);
            }
            if let Some(v) = email {
                active.email = Set(v.to_string());
            }
            if let Some(v) = request.phone {
                active.phone = Set(Some(v));
            }
            if let Some(v) = request.shift_schedule {
                active.shift_schedule = Set(Some(v));
            }
            if let Some(v) = request.is_active {
                active.is_active = Set(v);
            }
            if let Some(hash) = password_hash {
                active.password_hash = Set(hash);
            }
            active.updated_at = Set(now);
            Ok(active.update(db).await?.into())
        }
        StaffRole::Owner => unreachable!("rejected during validation"),
    }
}

/// Delete a staff record located by `(role, id)`; returns the display name
/// for the confirmation message.
pub async fn delete_staff(
    db: &DatabaseConnection,
    id: i32,
    request: DeleteStaffRequest,
) -> Result<String> {
    let mut errors = FieldErrors::new();
    let role = parse_staff_role(request.role.as_deref(), &mut errors);
    errors.into_result()?;

    match role.unwrap() {
        StaffRole::Trainer => {
            let trainer = Trainers::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| not_found!("staff member"))?;
            let name = format!("{} {}", trainer.first_name, trainer.last_name);
            trainer.delete(db).await?;
            Ok(name)
        }
        StaffRole::FrontDesk => {
            let secretary = Secretaries::find_by_id(id)
                .one(db)
                .await?
                .ok_or_else(|| not_found!("staff member"))?;
            let name = format!("{} {}", secretary.first_name, secretary.last_name);
            secretary.delete(db).await?;
            Ok(name)
        }
        StaffRole::Owner => unreachable!("rejected during validation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_staff_role_rejects_owner() {
        let mut errors = FieldErrors::new();
        assert_eq!(parse_staff_role(Some("owner"), &mut errors), None);
        assert!(errors.contains("role"));
    }

    #[test]
    fn test_parse_staff_role_accepts_aliases() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            parse_staff_role(Some("Coach"), &mut errors),
            Some(StaffRole::Trainer)
        );
        assert_eq!(
            parse_staff_role(Some("Secretary"), &mut errors),
            Some(StaffRole::FrontDesk)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_role_is_required() {
        let mut errors = FieldErrors::new();
        assert_eq!(parse_staff_role(None, &mut errors), None);
        assert!(errors.contains("role"));
    }
}
