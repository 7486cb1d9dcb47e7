//! Staff identity tables: merged listing, cross-table email uniqueness and
//! role-addressed mutations.

mod common;

use entity::{StaffRole, secretaries::Entity as Secretaries, trainers::Entity as Trainers};
use gym_api::api::services::staff::{
    CreateStaffRequest, DeleteStaffRequest, UpdateStaffRequest, create_staff, delete_staff,
    list_staff, update_staff,
};
use gym_api::auth::verify_password;
use gym_api::error::AppError;
use sea_orm::EntityTrait;

fn create_request(role: &str, email: &str) -> CreateStaffRequest {
    CreateStaffRequest {
        role: Some(role.to_string()),
        first_name: Some("Sam".to_string()),
        last_name: Some("Lee".to_string()),
        email: Some(email.to_string()),
        phone: None,
        password: Some("initial-pass".to_string()),
        gym_id: Some(1),
        specialization: None,
        shift_schedule: None,
    }
}

fn empty_update(role: &str) -> UpdateStaffRequest {
    UpdateStaffRequest {
        role: Some(role.to_string()),
        first_name: None,
        last_name: None,
        email: None,
        phone: None,
        password: None,
        specialization: None,
        shift_schedule: None,
        is_active: None,
    }
}

#[tokio::test]
async fn listing_merges_both_tables_tagged_by_role() {
    let db = common::setup_db().await;

    create_staff(&db, create_request("trainer", "t@gym.local"))
        .await
        .unwrap();
    create_staff(&db, create_request("frontdesk", "f@gym.local"))
        .await
        .unwrap();

    let staff = list_staff(&db).await.unwrap();
    assert_eq!(staff.len(), 2);
    assert!(staff
        .iter()
        .any(|s| s.role == StaffRole::Trainer && s.email == "t@gym.local"));
    assert!(staff
        .iter()
        .any(|s| s.role == StaffRole::FrontDesk && s.email == "f@gym.local"));
}

#[tokio::test]
async fn ids_are_only_unique_per_table() {
    let db = common::setup_db().await;

    let trainer = create_staff(&db, create_request("trainer", "t@gym.local"))
        .await
        .unwrap();
    let secretary = create_staff(&db, create_request("frontdesk", "f@gym.local"))
        .await
        .unwrap();

    // Both tables start counting at 1, so the same numeric id can point at
    // two different people. Role disambiguates.
    assert_eq!(trainer.id, secretary.id);
}

#[tokio::test]
async fn email_is_unique_across_staff_tables() {
    let db = common::setup_db().await;

    create_staff(&db, create_request("trainer", "shared@gym.local"))
        .await
        .unwrap();

    let err = create_staff(&db, create_request("frontdesk", "shared@gym.local"))
        .await
        .unwrap_err();
    match err {
        AppError::Validation { errors } => assert!(errors.contains("email")),
        other => panic!("expected validation error, got {other:?}"),
    }

    // The seeded owner account blocks its email too.
    let err = create_staff(&db, create_request("trainer", "owner@gym.local"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn update_rechecks_email_across_tables() {
    let db = common::setup_db().await;

    create_staff(&db, create_request("trainer", "t@gym.local"))
        .await
        .unwrap();
    let secretary = create_staff(&db, create_request("frontdesk", "f@gym.local"))
        .await
        .unwrap();

    let mut update = empty_update("frontdesk");
    update.email = Some("t@gym.local".to_string());
    let err = update_staff(&db, secretary.id, update).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    // Keeping your own email is not a conflict.
    let mut update = empty_update("frontdesk");
    update.email = Some("f@gym.local".to_string());
    update_staff(&db, secretary.id, update).await.unwrap();
}

#[tokio::test]
async fn empty_password_keeps_stored_credential() {
    let db = common::setup_db().await;

    let trainer = create_staff(&db, create_request("trainer", "t@gym.local"))
        .await
        .unwrap();

    let mut update = empty_update("trainer");
    update.password = Some(String::new());
    update.first_name = Some("Renamed".to_string());
    let updated = update_staff(&db, trainer.id, update).await.unwrap();
    assert_eq!(updated.first_name, "Renamed");

    let stored = Trainers::find_by_id(trainer.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(verify_password("initial-pass", &stored.password_hash));

    // A non-empty password replaces it.
    let mut update = empty_update("trainer");
    update.password = Some("rotated-pass".to_string());
    update_staff(&db, trainer.id, update).await.unwrap();
    let stored = Trainers::find_by_id(trainer.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(verify_password("rotated-pass", &stored.password_hash));
    assert!(!verify_password("initial-pass", &stored.password_hash));
}

#[tokio::test]
async fn delete_is_addressed_by_role_and_id() {
    let db = common::setup_db().await;

    let trainer = create_staff(&db, create_request("trainer", "t@gym.local"))
        .await
        .unwrap();

    // Same id in the other table does not exist.
    let err = delete_staff(
        &db,
        trainer.id,
        DeleteStaffRequest {
            role: Some("frontdesk".to_string()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    let name = delete_staff(
        &db,
        trainer.id,
        DeleteStaffRequest {
            role: Some("trainer".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(name, "Sam Lee");

    assert!(Trainers::find_by_id(trainer.id)
        .one(&db)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn owner_accounts_are_not_managed_through_staff() {
    let db = common::setup_db().await;

    let err = create_staff(&db, create_request("owner", "boss@gym.local"))
        .await
        .unwrap_err();
    match err {
        AppError::Validation { errors } => assert!(errors.contains("role")),
        other => panic!("expected validation error, got {other:?}"),
    }

    // A delete without a role cannot pick a table.
    let err = delete_staff(&db, 1, DeleteStaffRequest { role: None })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let _ = Secretaries::find().all(&db).await.unwrap();
}
