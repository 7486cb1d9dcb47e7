//! Referential-action behavior: cascading organization deletes, trainer
//! unassignment and sale-row survival.

mod common;

use chrono::Utc;
use entity::{
    ActorRef, StaffRole, clients::Entity as Clients, gym_classes::Entity as GymClasses,
    gyms::Entity as Gyms, product_sales, product_sales::Entity as ProductSales,
    products::Entity as Products, trainers::Entity as Trainers,
};
use gym_api::api::services::classes::{CreateClassRequest, create_class, get_class};
use gym_api::api::services::clients::{CreateClientRequest, create_client, delete_client};
use gym_api::api::services::products::{CreateProductRequest, create_product};
use gym_api::api::services::staff::{DeleteStaffRequest, delete_staff};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

fn owner() -> ActorRef {
    ActorRef::new(StaffRole::Owner, 1)
}

async fn seed_client(db: &sea_orm::DatabaseConnection) -> i32 {
    common::seed_plan(db, "Monthly", 30).await;
    create_client(
        db,
        CreateClientRequest {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            phone: Some("555-0100".to_string()),
            membership: Some("Monthly".to_string()),
            gym_id: Some(1),
            email: None,
            birth_date: None,
            gender: None,
            address: None,
            notes: None,
            payment_method: None,
        },
        owner(),
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn deleting_the_gym_cascades_transitively() {
    let db = common::setup_db().await;
    let trainer = common::seed_trainer(&db, "t@gym.local").await;
    seed_client(&db).await;

    create_class(
        &db,
        CreateClassRequest {
            name: Some("Spin".to_string()),
            description: None,
            trainer_id: Some(trainer.id),
            capacity: Some(20),
            duration_minutes: Some(45),
            color: None,
            gym_id: Some(1),
        },
    )
    .await
    .unwrap();

    create_product(
        &db,
        CreateProductRequest {
            name: Some("Protein Bar".to_string()),
            description: None,
            price: Some(2.5),
            cost: None,
            stock_quantity: Some(100),
            category: Some("Snacks".to_string()),
            image_url: None,
            gym_id: Some(1),
        },
    )
    .await
    .unwrap();

    Gyms::delete_by_id(1).exec(&db).await.unwrap();

    assert!(Clients::find().all(&db).await.unwrap().is_empty());
    assert!(Trainers::find().all(&db).await.unwrap().is_empty());
    assert!(GymClasses::find().all(&db).await.unwrap().is_empty());
    assert!(Products::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_trainer_unassigns_their_classes() {
    let db = common::setup_db().await;
    let trainer = common::seed_trainer(&db, "t@gym.local").await;

    let class = create_class(
        &db,
        CreateClassRequest {
            name: Some("Spin".to_string()),
            description: None,
            trainer_id: Some(trainer.id),
            capacity: Some(20),
            duration_minutes: Some(45),
            color: None,
            gym_id: Some(1),
        },
    )
    .await
    .unwrap();
    assert_eq!(class.trainer_name.as_deref(), Some("Alex Strong"));

    delete_staff(
        &db,
        trainer.id,
        DeleteStaffRequest {
            role: Some("trainer".to_string()),
        },
    )
    .await
    .unwrap();

    // The class survives with the assignment cleared.
    let class = get_class(&db, class.id).await.unwrap();
    assert_eq!(class.trainer_id, None);
    assert_eq!(class.trainer_name, None);

    let stored = GymClasses::find_by_id(class.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.trainer_id, None);
    assert_eq!(stored.name, "Spin");
}

#[tokio::test]
async fn deleting_a_client_keeps_their_sales() {
    let db = common::setup_db().await;
    let client_id = seed_client(&db).await;

    let product = create_product(
        &db,
        CreateProductRequest {
            name: Some("Protein Bar".to_string()),
            description: None,
            price: Some(2.5),
            cost: None,
            stock_quantity: Some(100),
            category: None,
            image_url: None,
            gym_id: Some(1),
        },
    )
    .await
    .unwrap();

    let sale = product_sales::ActiveModel {
        product_id: Set(product.id),
        client_id: Set(Some(client_id)),
        quantity: Set(2),
        unit_price: Set(2.5),
        total_price: Set(5.0),
        sold_by_role: Set(Some(StaffRole::FrontDesk)),
        sold_by_id: Set(Some(1)),
        sold_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    delete_client(&db, client_id).await.unwrap();

    // The sale row stays for bookkeeping, with the buyer reference cleared.
    let stored = ProductSales::find_by_id(sale.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.client_id, None);
    assert_eq!(stored.quantity, 2);

    let by_product = ProductSales::find()
        .filter(product_sales::Column::ProductId.eq(product.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(by_product.len(), 1);
}
