//! Shared test fixtures: an in-memory database with the full schema applied
//! and helpers for seeding reference data.

#![allow(dead_code)]

use chrono::Utc;
use entity::{membership_plans, trainers};
use gym_api::auth::JwtManager;
use gym_api::database::{init_database, run_migrations};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Fresh in-memory database with all migrations applied. The seed migration
/// provisions gym 1 and the default owner account.
pub async fn setup_db() -> DatabaseConnection {
    let db = init_database("sqlite::memory:")
        .await
        .expect("in-memory database");
    run_migrations(&db).await.expect("migrations");
    db
}

pub fn jwt() -> JwtManager {
    JwtManager::new("integration-test-secret", 3600)
}

pub async fn seed_plan(
    db: &DatabaseConnection,
    name: &str,
    duration_days: i32,
) -> membership_plans::Model {
    let now = Utc::now().naive_utc();
    membership_plans::ActiveModel {
        gym_id: Set(1),
        name: Set(name.to_string()),
        description: Set(None),
        price: Set(49.99),
        duration_days: Set(duration_days),
        features: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed plan")
}

pub async fn seed_trainer(db: &DatabaseConnection, email: &str) -> trainers::Model {
    let now = Utc::now().naive_utc();
    trainers::ActiveModel {
        gym_id: Set(1),
        first_name: Set("Alex".to_string()),
        last_name: Set("Strong".to_string()),
        email: Set(email.to_string()),
        phone: Set(None),
        password_hash: Set(gym_api::auth::hash_password("trainer-pass").expect("hash")),
        specialization: Set(Some("Strength".to_string())),
        hire_date: Set(Utc::now().date_naive()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed trainer")
}
