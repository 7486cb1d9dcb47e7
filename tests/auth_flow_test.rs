//! Login, registration, token revocation and the role scoping of issued
//! tokens.

mod common;

use entity::{StaffRole, access_tokens, access_tokens::Entity as AccessTokens};
use gym_api::api::services::auth::{
    LoginRequest, RegisterRequest, current_user, login, logout, register,
};
use gym_api::error::AppError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

fn login_request(email: &str, password: &str, user_type: &str) -> LoginRequest {
    LoginRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        user_type: Some(user_type.to_string()),
    }
}

#[tokio::test]
async fn seeded_owner_can_log_in() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    let response = login(&db, &jwt, login_request("owner@gym.local", "changeme", "owner"))
        .await
        .unwrap();

    assert_eq!(response.user_type, StaffRole::Owner);
    assert_eq!(response.token_type, "Bearer");

    let claims = jwt.validate_token(&response.access_token).unwrap();
    assert_eq!(claims.role, StaffRole::Owner);

    // The issued token is on record.
    let registered = AccessTokens::find()
        .filter(access_tokens::Column::Jti.eq(claims.jti))
        .one(&db)
        .await
        .unwrap();
    assert!(registered.is_some());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    let wrong_password = login(&db, &jwt, login_request("owner@gym.local", "nope", "owner"))
        .await
        .unwrap_err();
    let unknown_email = login(&db, &jwt, login_request("ghost@gym.local", "changeme", "owner"))
        .await
        .unwrap_err();

    let msg = |e: &AppError| match e {
        AppError::Unauthorized { message } => message.clone(),
        other => panic!("expected unauthorized, got {other:?}"),
    };
    assert_eq!(msg(&wrong_password), msg(&unknown_email));
}

#[tokio::test]
async fn login_only_consults_the_requested_table() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    // The owner's credentials exist only in the admins table.
    let err = login(&db, &jwt, login_request("owner@gym.local", "changeme", "trainer"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized { .. }));
}

#[tokio::test]
async fn register_then_login_as_trainer() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    let response = register(
        &db,
        &jwt,
        RegisterRequest {
            user_type: Some("trainer".to_string()),
            first_name: Some("Pat".to_string()),
            last_name: Some("Kim".to_string()),
            email: Some("pat@gym.local".to_string()),
            password: Some("pat-pass".to_string()),
            phone: None,
            gym_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(response.user_type, StaffRole::Trainer);

    let response = login(&db, &jwt, login_request("pat@gym.local", "pat-pass", "trainer"))
        .await
        .unwrap();
    let claims = jwt.validate_token(&response.access_token).unwrap();

    let me = current_user(&db, claims.role, claims.sub).await.unwrap();
    assert_eq!(me.user_type, StaffRole::Trainer);
    assert_eq!(me.user["email"], "pat@gym.local");
}

#[tokio::test]
async fn register_rejects_email_used_by_any_role() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    let err = register(
        &db,
        &jwt,
        RegisterRequest {
            user_type: Some("frontdesk".to_string()),
            first_name: Some("Pat".to_string()),
            last_name: Some("Kim".to_string()),
            email: Some("owner@gym.local".to_string()),
            password: Some("pat-pass".to_string()),
            phone: None,
            gym_id: None,
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation { errors } => assert!(errors.contains("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn logout_revokes_only_the_presented_token() {
    let db = common::setup_db().await;
    let jwt = common::jwt();

    let first = login(&db, &jwt, login_request("owner@gym.local", "changeme", "owner"))
        .await
        .unwrap();
    let second = login(&db, &jwt, login_request("owner@gym.local", "changeme", "owner"))
        .await
        .unwrap();

    let first_jti = jwt.validate_token(&first.access_token).unwrap().jti;
    let second_jti = jwt.validate_token(&second.access_token).unwrap().jti;
    assert_ne!(first_jti, second_jti);

    logout(&db, &first_jti).await.unwrap();

    let revoked = AccessTokens::find()
        .filter(access_tokens::Column::Jti.eq(first_jti.clone()))
        .one(&db)
        .await
        .unwrap();
    assert!(revoked.is_none());

    // The other session of the same account stays live.
    let surviving = AccessTokens::find()
        .filter(access_tokens::Column::Jti.eq(second_jti))
        .one(&db)
        .await
        .unwrap();
    assert!(surviving.is_some());

    // Revoking twice is harmless.
    logout(&db, &first_jti).await.unwrap();
}
