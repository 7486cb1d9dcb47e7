//! Client lifecycle: transactional creation, derived current membership and
//! plan transitions.

mod common;

use chrono::{Duration, Utc};
use entity::{
    ActorRef, MembershipStatus, StaffRole, client_memberships,
    client_memberships::Entity as ClientMemberships,
};
use gym_api::api::services::clients::{
    CreateClientRequest, UpdateClientRequest, create_client, delete_client, get_client,
    list_clients, update_client,
};
use gym_api::error::AppError;
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

fn owner() -> ActorRef {
    ActorRef::new(StaffRole::Owner, 1)
}

fn create_request(plan: &str) -> CreateClientRequest {
    CreateClientRequest {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        phone: Some("555-0100".to_string()),
        membership: Some(plan.to_string()),
        gym_id: Some(1),
        email: Some("jane@example.com".to_string()),
        birth_date: None,
        gender: None,
        address: None,
        notes: None,
        payment_method: None,
    }
}

fn empty_update() -> UpdateClientRequest {
    UpdateClientRequest {
        first_name: None,
        last_name: None,
        phone: None,
        membership: None,
        email: None,
        birth_date: None,
        gender: None,
        address: None,
        notes: None,
        is_active: None,
    }
}

#[tokio::test]
async fn create_opens_membership_with_plan_duration() {
    let db = common::setup_db().await;
    common::seed_plan(&db, "Monthly", 30).await;

    let detail = create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    assert_eq!(detail.membership, "Monthly");
    assert_eq!(detail.membership_status, Some(MembershipStatus::Active));
    let today = Utc::now().date_naive();
    assert_eq!(detail.membership_end_date, Some(today + Duration::days(30)));

    let membership = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(detail.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(membership.start_date, today);
    assert_eq!(membership.created_by_role, Some(StaffRole::Owner));
    assert_eq!(membership.created_by_id, Some(1));
    // Default when the request does not name one.
    assert_eq!(membership.payment_method, "Cash");
}

#[tokio::test]
async fn create_without_membership_field_is_rejected() {
    let db = common::setup_db().await;

    let mut request = create_request("Monthly");
    request.membership = None;

    let err = create_client(&db, request, owner()).await.unwrap_err();
    match err {
        AppError::Validation { errors } => assert!(errors.contains("membership")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn unresolvable_plan_name_creates_client_without_membership() {
    let db = common::setup_db().await;

    let detail = create_client(&db, create_request("No Such Plan"), owner())
        .await
        .unwrap();

    assert_eq!(detail.membership, "None");
    assert_eq!(detail.membership_status, None);

    let rows = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(detail.id))
        .all(&db)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn plan_change_expires_old_row_and_opens_new_one() {
    let db = common::setup_db().await;
    common::seed_plan(&db, "Monthly", 30).await;
    common::seed_plan(&db, "Annual", 365).await;

    let created = create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    let mut update = empty_update();
    update.membership = Some("Annual".to_string());
    let updated = update_client(&db, created.id, update, owner()).await.unwrap();
    assert_eq!(updated.membership, "Annual");

    let rows = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(created.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    let expired = rows
        .iter()
        .filter(|m| m.status == MembershipStatus::Expired)
        .count();
    let active = rows
        .iter()
        .filter(|m| m.status == MembershipStatus::Active)
        .count();
    assert_eq!((expired, active), (1, 1));
}

#[tokio::test]
async fn same_plan_update_inserts_nothing() {
    let db = common::setup_db().await;
    common::seed_plan(&db, "Monthly", 30).await;

    let created = create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    let mut update = empty_update();
    update.membership = Some("Monthly".to_string());
    update_client(&db, created.id, update, owner()).await.unwrap();

    let rows = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(created.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, MembershipStatus::Active);
}

#[tokio::test]
async fn current_membership_is_active_row_with_latest_end_date() {
    let db = common::setup_db().await;
    let monthly = common::seed_plan(&db, "Monthly", 30).await;
    let annual = common::seed_plan(&db, "Annual", 365).await;

    let created = create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    // A second, longer active row inserted out of band.
    let today = Utc::now().date_naive();
    let now = Utc::now().naive_utc();
    client_memberships::ActiveModel {
        client_id: Set(created.id),
        plan_id: Set(annual.id),
        start_date: Set(today),
        end_date: Set(today + Duration::days(365)),
        status: Set(MembershipStatus::Active),
        auto_renew: Set(false),
        payment_method: Set("Cash".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let detail = get_client(&db, created.id).await.unwrap();
    assert_eq!(detail.membership, "Annual");
    assert_eq!(detail.membership_end_date, Some(today + Duration::days(365)));

    let summaries = list_clients(&db).await.unwrap();
    let summary = summaries.iter().find(|c| c.id == created.id).unwrap();
    assert_eq!(summary.membership, "Annual");

    // Sanity: the shorter plan is still on file.
    let rows = ClientMemberships::find()
        .filter(client_memberships::Column::PlanId.eq(monthly.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn deleting_a_client_cascades_membership_history() {
    let db = common::setup_db().await;
    common::seed_plan(&db, "Monthly", 30).await;

    let created = create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    let name = delete_client(&db, created.id).await.unwrap();
    assert_eq!(name, "Jane Doe");

    let rows = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(created.id))
        .all(&db)
        .await
        .unwrap();
    assert!(rows.is_empty());

    assert!(matches!(
        get_client(&db, created.id).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}

#[tokio::test]
async fn duplicate_client_email_is_rejected() {
    let db = common::setup_db().await;
    common::seed_plan(&db, "Monthly", 30).await;

    create_client(&db, create_request("Monthly"), owner())
        .await
        .unwrap();

    let mut request = create_request("Monthly");
    request.phone = Some("555-0101".to_string());
    let err = create_client(&db, request, owner()).await.unwrap_err();
    match err {
        AppError::Validation { errors } => assert!(errors.contains("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
}
