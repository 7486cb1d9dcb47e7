//! # Client service
//!
//! Client CRUD with derived membership state. "Current membership" is never
//! stored: every read path filters the client's rows to `active` status and
//! takes the one with the latest `end_date`. When a data anomaly leaves two
//! active rows, the later-ending one wins and the other is ignored.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use entity::{
    ActorRef, MembershipStatus, client_memberships,
    client_memberships::Entity as ClientMemberships, clients, clients::Entity as Clients,
    gyms::Entity as Gyms, membership_plans, membership_plans::Entity as MembershipPlans,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, Result};
use crate::not_found;

/// Sentinel plan name for clients without an active membership.
const NO_MEMBERSHIP: &str = "None";

/// Create client request.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    /// Membership plan name; required, but a name that resolves to no plan
    /// still creates the client without a membership row.
    pub membership: Option<String>,
    pub gym_id: Option<i32>,
    pub email: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<String>,
}

/// Update client request; absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    /// Plan name; when it differs from the current active plan the membership
    /// is transitioned inside the same transaction as the scalar update.
    pub membership: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}

/// List projection.
#[derive(Debug, Serialize)]
pub struct ClientSummary {
    pub id: i32,
    pub name: String,
    pub membership: String,
    pub is_active: bool,
    pub join_date: chrono::NaiveDate,
    pub membership_end_date: Option<chrono::NaiveDate>,
}

/// Full client view.
#[derive(Debug, Serialize)]
pub struct ClientDetail {
    pub id: i32,
    pub gym_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub birth_date: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub join_date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub is_active: bool,
    pub membership: String,
    pub membership_id: Option<i32>,
    pub membership_status: Option<MembershipStatus>,
    pub membership_end_date: Option<chrono::NaiveDate>,
}

/// Membership plan projection.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_days: i32,
}

/// Pick the current membership: the `active` row with the latest `end_date`.
pub(crate) fn current_membership(
    rows: &[client_memberships::Model],
) -> Option<&client_memberships::Model> {
    rows.iter()
        .filter(|m| m.status == MembershipStatus::Active)
        .max_by_key(|m| m.end_date)
}

async fn plan_names(db: &DatabaseConnection) -> Result<HashMap<i32, String>> {
    Ok(MembershipPlans::find()
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect())
}

/// List every client with derived membership state.
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<ClientSummary>> {
    let names = plan_names(db).await?;
    let rows = Clients::find()
        .find_with_related(ClientMemberships)
        .order_by_asc(clients::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(client, memberships)| {
            let current = current_membership(&memberships);
            ClientSummary {
                id: client.id,
                name: client.full_name(),
                membership: current
                    .and_then(|m| names.get(&m.plan_id).cloned())
                    .unwrap_or_else(|| NO_MEMBERSHIP.to_string()),
                is_active: client.is_active,
                join_date: client.join_date,
                membership_end_date: current.map(|m| m.end_date),
            }
        })
        .collect())
}

/// Fetch one client with full contact fields and derived membership state.
pub async fn get_client(db: &DatabaseConnection, id: i32) -> Result<ClientDetail> {
    let client = Clients::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("client"))?;
    detail(db, client).await
}

async fn detail(db: &DatabaseConnection, client: clients::Model) -> Result<ClientDetail> {
    let memberships = client.find_related(ClientMemberships).all(db).await?;
    let current = current_membership(&memberships);

    let membership = match current {
        Some(m) => MembershipPlans::find_by_id(m.plan_id)
            .one(db)
            .await?
            .map_or_else(|| NO_MEMBERSHIP.to_string(), |p| p.name),
        None => NO_MEMBERSHIP.to_string(),
    };

    Ok(ClientDetail {
        id: client.id,
        gym_id: client.gym_id,
        first_name: client.first_name,
        last_name: client.last_name,
        email: client.email,
        phone: client.phone,
        birth_date: client.birth_date,
        gender: client.gender,
        address: client.address,
        join_date: client.join_date,
        notes: client.notes,
        is_active: client.is_active,
        membership,
        membership_id: current.map(|m| m.id),
        membership_status: current.map(|m| m.status),
        membership_end_date: current.map(|m| m.end_date),
    })
}

async fn check_email_unique<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    exclude_id: Option<i32>,
    errors: &mut FieldErrors,
) -> Result<()> {
    let mut query = Clients::find().filter(clients::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(clients::Column::Id.ne(id));
    }
    if query.one(conn).await?.is_some() {
        errors.add("email", "The email has already been taken.");
    }
    Ok(())
}

/// Create a client and, when the named plan resolves, its first membership.
///
/// Both inserts share one transaction: a failure after the client insert
/// rolls the whole operation back.
pub async fn create_client(
    db: &DatabaseConnection,
    request: CreateClientRequest,
    actor: ActorRef,
) -> Result<ClientDetail> {
    let mut errors = FieldErrors::new();
    let first_name = errors
        .require("first_name", request.first_name.as_deref())
        .map(str::to_string);
    let last_name = errors
        .require("last_name", request.last_name.as_deref())
        .map(str::to_string);
    let phone = errors
        .require("phone", request.phone.as_deref())
        .map(str::to_string);
    let membership = errors
        .require("membership", request.membership.as_deref())
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

    let email = request.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    if let Some(email) = email {
        check_email_unique(db, email, None, &mut errors).await?;
    }
    errors.into_result()?;

    let (first_name, last_name, phone, membership, gym_id) = (
        first_name.unwrap(),
        last_name.unwrap(),
        phone.unwrap(),
        membership.unwrap(),
        gym_id.unwrap(),
    );

    let now = Utc::now().naive_utc();
    let today = Utc::now().date_naive();

    let txn = db.begin().await?;

    let client = clients::ActiveModel {
        gym_id: Set(gym_id),
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email.map(str::to_string)),
        phone: Set(phone),
        birth_date: Set(request.birth_date),
        gender: Set(request.gender),
        address: Set(request.address),
        join_date: Set(today),
        notes: Set(request.notes),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // A plan name that resolves to nothing is not an error: the client is
    // still created, with zero membership rows.
    if let Some(plan) = MembershipPlans::find()
        .filter(membership_plans::Column::Name.eq(&membership))
        .one(&txn)
        .await?
    {
        insert_membership(&txn, client.id, &plan, request.payment_method, actor).await?;
    }

    txn.commit().await?;

    detail(db, client).await
}

async fn insert_membership<C: ConnectionTrait>(
    conn: &C,
    client_id: i32,
    plan: &membership_plans::Model,
    payment_method: Option<String>,
    actor: ActorRef,
) -> Result<client_memberships::Model> {
    let now = Utc::now().naive_utc();
    let start = Utc::now().date_naive();
    Ok(client_memberships::ActiveModel {
        client_id: Set(client_id),
        plan_id: Set(plan.id),
        start_date: Set(start),
        end_date: Set(start + Duration::days(i64::from(plan.duration_days))),
        status: Set(MembershipStatus::Active),
        auto_renew: Set(false),
        payment_method: Set(payment_method.unwrap_or_else(|| "Cash".to_string())),
        created_by_role: Set(Some(actor.role)),
        created_by_id: Set(Some(actor.id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?)
}

/// Partial update, including a membership plan transition when the provided
/// plan name differs from the client's current active plan.
pub async fn update_client(
    db: &DatabaseConnection,
    id: i32,
    request: UpdateClientRequest,
    actor: ActorRef,
) -> Result<ClientDetail> {
    let client = Clients::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("client"))?;

    let mut errors = FieldErrors::new();
    let email = request.email.as_deref().map(str::trim).filter(|e| !e.is_empty());
    if let Some(email) = email {
        check_email_unique(db, email, Some(client.id), &mut errors).await?;
    }
    errors.into_result()?;

    let txn = db.begin().await?;

    let mut active: clients::ActiveModel = client.clone().into();
    if let Some(v) = request.first_name {
        active.first_name = Set(v);
    }
    if let Some(v) = request.last_name {
        active.last_name = Set(v);
    }
    if let Some(v) = request.phone {
        active.phone = Set(v);
    }
    if let Some(v) = email {
        active.email = Set(Some(v.to_string()));
    }
    if let Some(v) = request.birth_date {
        active.birth_date = Set(Some(v));
    }
    if let Some(v) = request.gender {
        active.gender = Set(Some(v));
    }
    if let Some(v) = request.address {
        active.address = Set(Some(v));
    }
    if let Some(v) = request.notes {
        active.notes = Set(Some(v));
    }
    if let Some(v) = request.is_active {
        active.is_active = Set(v);
    }
    active.updated_at = Set(Utc::now().naive_utc());
    let client = active.update(&txn).await?;

    if let Some(plan_name) = request.membership.as_deref().map(str::trim)
        && !plan_name.is_empty()
    {
        transition_membership(&txn, &client, plan_name, actor).await?;
    }

    txn.commit().await?;

    detail(db, client).await
}

/// Expire the current active membership and start a fresh one, unless the
/// requested plan is already the current one. An unresolvable plan name
/// leaves the membership history untouched.
async fn transition_membership<C: ConnectionTrait>(
    conn: &C,
    client: &clients::Model,
    plan_name: &str,
    actor: ActorRef,
) -> Result<()> {
    let memberships = ClientMemberships::find()
        .filter(client_memberships::Column::ClientId.eq(client.id))
        .all(conn)
        .await?;
    let current = current_membership(&memberships);

    if let Some(current) = current {
        let current_plan = MembershipPlans::find_by_id(current.plan_id).one(conn).await?;
        if current_plan.as_ref().is_some_and(|p| p.name == plan_name) {
            // Same plan, nothing to do.
            return Ok(());
        }
    }

    let Some(new_plan) = MembershipPlans::find()
        .filter(membership_plans::Column::Name.eq(plan_name))
        .one(conn)
        .await?
    else {
        return Ok(());
    };

    if let Some(current) = current {
        let mut expiring: client_memberships::ActiveModel = current.clone().into();
        expiring.status = Set(MembershipStatus::Expired);
        expiring.updated_at = Set(Utc::now().naive_utc());
        expiring.update(conn).await?;
    }

    insert_membership(conn, client.id, &new_plan, None, actor).await?;
    Ok(())
}

/// Delete a client; dependent rows go with it via cascading foreign keys.
pub async fn delete_client(db: &DatabaseConnection, id: i32) -> Result<String> {
    let client = Clients::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("client"))?;
    let name = client.full_name();
    client.delete(db).await?;
    Ok(name)
}

/// List all active membership plans.
pub async fn list_membership_plans(db: &DatabaseConnection) -> Result<Vec<PlanResponse>> {
    Ok(MembershipPlans::find()
        .filter(membership_plans::Column::IsActive.eq(true))
        .order_by_asc(membership_plans::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|p| PlanResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            duration_days: p.duration_days,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn membership(
        id: i32,
        status: MembershipStatus,
        end: (i32, u32, u32),
    ) -> client_memberships::Model {
        let end_date = NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap();
        client_memberships::Model {
            id,
            client_id: 1,
            plan_id: 1,
            start_date: end_date - Duration::days(30),
            end_date,
            status,
            auto_renew: false,
            payment_method: "Cash".to_string(),
            created_by_role: None,
            created_by_id: None,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn test_no_rows_yields_none() {
        assert!(current_membership(&[]).is_none());
    }

    #[rstest]
    #[case::only_expired(vec![
        membership(1, MembershipStatus::Expired, (2026, 1, 1)),
        membership(2, MembershipStatus::Cancelled, (2026, 6, 1)),
    ], None)]
    #[case::single_active(vec![
        membership(1, MembershipStatus::Expired, (2026, 9, 1)),
        membership(2, MembershipStatus::Active, (2026, 3, 1)),
    ], Some(2))]
    #[case::two_active_later_end_wins(vec![
        membership(1, MembershipStatus::Active, (2026, 3, 1)),
        membership(2, MembershipStatus::Active, (2026, 5, 1)),
    ], Some(2))]
    #[case::paused_is_not_current(vec![
        membership(1, MembershipStatus::Paused, (2026, 12, 1)),
        membership(2, MembershipStatus::Active, (2026, 5, 1)),
    ], Some(2))]
    fn test_current_membership_derivation(
        #[case] rows: Vec<client_memberships::Model>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(current_membership(&rows).map(|m| m.id), expected);
    }
}
