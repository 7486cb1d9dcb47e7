//! # Class service
//!
//! CRUD for the class catalog plus the trainer picker used by the dashboard.
//! Listings project the assigned trainer's display name; a deleted trainer
//! leaves the class behind with `trainer_id` nulled.

use entity::{
    gym_classes, gym_classes::Entity as GymClasses, gyms::Entity as Gyms, trainers,
    trainers::Entity as Trainers,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, Result};
use crate::not_found;

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub trainer_id: Option<i32>,
    pub capacity: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub color: Option<String>,
    pub gym_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Zero clears the assignment, absent keeps it.
    pub trainer_id: Option<i32>,
    pub capacity: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: i32,
    pub gym_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub trainer_id: Option<i32>,
    pub trainer_name: Option<String>,
    pub capacity: i32,
    pub duration_minutes: i32,
    pub color: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct CoachOption {
    pub id: i32,
    pub name: String,
}

fn to_response(class: gym_classes::Model, trainer: Option<&trainers::Model>) -> ClassResponse {
    ClassResponse {
        id: class.id,
        gym_id: class.gym_id,
        name: class.name,
        description: class.description,
        trainer_id: class.trainer_id,
        trainer_name: trainer.map(|t| format!("{} {}", t.first_name, t.last_name)),
        capacity: class.capacity,
        duration_minutes: class.duration_minutes,
        color: class.color,
        is_active: class.is_active,
    }
}

/// List all classes with their trainer's display name.
pub async fn list_classes(db: &DatabaseConnection) -> Result<Vec<ClassResponse>> {
    let rows = GymClasses::find()
        .find_also_related(Trainers)
        .order_by_asc(gym_classes::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(class, trainer)| to_response(class, trainer.as_ref()))
        .collect())
}

/// Fetch one class.
pub async fn get_class(db: &DatabaseConnection, id: i32) -> Result<ClassResponse> {
    let (class, trainer) = GymClasses::find_by_id(id)
        .find_also_related(Trainers)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("class"))?;

    Ok(to_response(class, trainer.as_ref()))
}

async fn validate_trainer(
    db: &DatabaseConnection,
    trainer_id: i32,
    errors: &mut FieldErrors,
) -> Result<()> {
    if Trainers::find_by_id(trainer_id).one(db).await?.is_none() {
        errors.add("trainer_id", "The selected trainer is invalid.");
    }
    Ok(())
}

/// Create a class.
pub async fn create_class(
    db: &DatabaseConnection,
    request: CreateClassRequest,
) -> Result<ClassResponse> {
    let mut errors = FieldErrors::new();
    let name = errors
        .require("name", request.name.as_deref())
        .map(str::to_string);
    let capacity = request.capacity;
    if capacity.is_none() {
        errors.add("capacity", "The capacity field is required.");
    } else if capacity.is_some_and(|c| c <= 0) {
        errors.add("capacity", "The capacity must be at least 1.");
    }
    let duration = request.duration_minutes;
    if duration.is_none() {
        errors.add("duration_minutes", "The duration_minutes field is required.");
    } else if duration.is_some_and(|d| d <= 0) {
        errors.add("duration_minutes", "The duration_minutes must be at least 1.");
    }
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
    if let Some(trainer_id) = request.trainer_id {
        validate_trainer(db, trainer_id, &mut errors).await?;
    }
    errors.into_result()?;

    let now = chrono::Utc::now().naive_utc();
    let class = gym_classes::ActiveModel {
        gym_id: Set(gym_id.unwrap()),
        trainer_id: Set(request.trainer_id),
        name: Set(name.unwrap()),
        description: Set(request.description),
        capacity: Set(capacity.unwrap()),
        duration_minutes: Set(duration.unwrap()),
        color: Set(request.color),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let trainer = match class.trainer_id {
        Some(id) => Trainers::find_by_id(id).one(db).await?,
        None => None,
    };
    Ok(to_response(class, trainer.as_ref()))
}

/// Partially update a class.
pub async fn update_class(
    db: &DatabaseConnection,
    id: i32,
    request: UpdateClassRequest,
) -> Result<ClassResponse> {
    let class = GymClasses::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("class"))?;

    let mut errors = FieldErrors::new();
    if let Some(c) = request.capacity
        && c <= 0
    {
        errors.add("capacity", "The capacity must be at least 1.");
    }
    if let Some(d) = request.duration_minutes
        && d <= 0
    {
        errors.add("duration_minutes", "The duration_minutes must be at least 1.");
    }
    if let Some(trainer_id) = request.trainer_id
        && trainer_id != 0
    {
        validate_trainer(db, trainer_id, &mut errors).await?;
    }
    errors.into_result()?;

    let mut active: gym_classes::ActiveModel = class.into();
    if let Some(v) = request.name {
        active.name = Set(v);
    }
    if let Some(v) = request.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = request.trainer_id {
        active.trainer_id = Set(if v == 0 { None } else { Some(v) });
    }
    if let Some(v) = request.capacity {
        active.capacity = Set(v);
    }
    if let Some(v) = request.duration_minutes {
        active.duration_minutes = Set(v);
    }
    if let Some(v) = request.color {
        active.color = Set(Some(v));
    }
    if let Some(v) = request.is_active {
        active.is_active = Set(v);
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());
    let class = active.update(db).await?;

    let trainer = match class.trainer_id {
        Some(id) => Trainers::find_by_id(id).one(db).await?,
        None => None,
    };
    Ok(to_response(class, trainer.as_ref()))
}

/// Delete a class; sessions and registrations cascade.
pub async fn delete_class(db: &DatabaseConnection, id: i32) -> Result<String> {
    let class = GymClasses::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("class"))?;
    let name = class.name.clone();
    class.delete(db).await?;
    Ok(name)
}

/// Active trainers for the class-assignment picker.
pub async fn coaches_list(db: &DatabaseConnection) -> Result<Vec<CoachOption>> {
    let trainers = Trainers::find()
        .filter(trainers::Column::IsActive.eq(true))
        .order_by_asc(trainers::Column::FirstName)
        .all(db)
        .await?;

    Ok(trainers
        .into_iter()
        .map(|t| CoachOption {
            id: t.id,
            name: format!("{} {}", t.first_name, t.last_name),
        })
        .collect())
}
