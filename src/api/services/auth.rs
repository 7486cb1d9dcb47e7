//! # Authentication service
//!
//! Role-scoped login against the three staff identity tables, registration,
//! token revocation and current-user lookup. A login only ever consults the
//! table named by `user_type`; the issued token is scoped to that role and
//! cannot reach another role's routes even when the same email exists there.

use chrono::Utc;
use entity::{
    StaffRole, access_tokens, access_tokens::Entity as AccessTokens, admins,
    admins::Entity as Admins, gyms::Entity as Gyms, secretaries, secretaries::Entity as Secretaries,
    trainers, trainers::Entity as Trainers,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{JwtManager, hash_password, verify_password};
use crate::error::{FieldErrors, Result};
use crate::{not_found, unauthorized};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub gym_id: Option<i32>,
}

/// Successful login/registration payload.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_type: StaffRole,
    pub user: serde_json::Value,
}

/// Current-user payload.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user_type: StaffRole,
    pub user: serde_json::Value,
}

/// A credential row resolved from one of the identity tables.
struct Identity {
    id: i32,
    email: String,
    password_hash: String,
    is_active: bool,
    user: serde_json::Value,
}

async fn find_identity(
    db: &DatabaseConnection,
    role: StaffRole,
    email: &str,
) -> Result<Option<Identity>> {
    let identity = match role {
        StaffRole::Owner => Admins::find()
            .filter(admins::Column::Email.eq(email))
            .one(db)
            .await?
            .map(|m| Identity {
                id: m.id,
                email: m.email.clone(),
                password_hash: m.password_hash.clone(),
                is_active: m.is_active,
                user: serde_json::to_value(&m).unwrap_or_default(),
            }),
        StaffRole::Trainer => Trainers::find()
            .filter(trainers::Column::Email.eq(email))
            .one(db)
            .await?
            .map(|m| Identity {
                id: m.id,
                email: m.email.clone(),
                password_hash: m.password_hash.clone(),
                is_active: m.is_active,
                user: serde_json::to_value(&m).unwrap_or_default(),
            }),
        StaffRole::FrontDesk => Secretaries::find()
            .filter(secretaries::Column::Email.eq(email))
            .one(db)
            .await?
            .map(|m| Identity {
                id: m.id,
                email: m.email.clone(),
                password_hash: m.password_hash.clone(),
                is_active: m.is_active,
                user: serde_json::to_value(&m).unwrap_or_default(),
            }),
    };
    Ok(identity)
}

async fn touch_last_login(db: &DatabaseConnection, role: StaffRole, id: i32) -> Result<()> {
    let now = Utc::now().naive_utc();
    match role {
        StaffRole::Owner => {
            admins::ActiveModel {
                id: Set(id),
                last_login_at: Set(Some(now)),
                ..Default::default()
            }
            .update(db)
            .await?;
        }
        StaffRole::Trainer => {
            trainers::ActiveModel {
                id: Set(id),
                last_login_at: Set(Some(now)),
                ..Default::default()
            }
            .update(db)
            .await?;
        }
        StaffRole::FrontDesk => {
            secretaries::ActiveModel {
                id: Set(id),
                last_login_at: Set(Some(now)),
                ..Default::default()
            }
            .update(db)
            .await?;
        }
    }
    Ok(())
}

/// Record an issued token in the revocation registry.
async fn register_token(
    db: &DatabaseConnection,
    role: StaffRole,
    actor_id: i32,
    jti: &str,
    exp: i64,
) -> Result<()> {
    let expires_at = chrono::DateTime::from_timestamp(exp, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_else(|| Utc::now().naive_utc());
    access_tokens::ActiveModel {
        jti: Set(jti.to_string()),
        actor_role: Set(role),
        actor_id: Set(actor_id),
        expires_at: Set(expires_at),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Authenticate against a single identity table and issue a scoped token.
pub async fn login(
    db: &DatabaseConnection,
    jwt: &JwtManager,
    request: LoginRequest,
) -> Result<TokenResponse> {
    let mut errors = FieldErrors::new();
    let email = errors
        .require("email", request.email.as_deref())
        .map(str::to_string);
    let password = errors
        .require("password", request.password.as_deref())
        .map(str::to_string);
    let role = match request.user_type.as_deref().map(str::trim) {
        None | Some("") => {
            errors.add("user_type", "The user_type field is required.");
            None
        }
        Some(value) => match StaffRole::parse(value) {
            Some(role) => Some(role),
            None => {
                errors.add("user_type", "The selected user_type is invalid.");
                None
            }
        },
    };
    errors.into_result()?;
    let (email, password, role) = (email.unwrap(), password.unwrap(), role.unwrap());

    // Unknown email and wrong password must be indistinguishable.
    let identity = find_identity(db, role, &email).await?;
    let Some(identity) = identity else {
        return Err(unauthorized!("invalid credentials"));
    };
    if !identity.is_active || !verify_password(&password, &identity.password_hash) {
        return Err(unauthorized!("invalid credentials"));
    }

    touch_last_login(db, role, identity.id).await?;

    let issued = jwt.issue_token(role, identity.id, &identity.email)?;
    register_token(db, role, identity.id, &issued.claims.jti, issued.claims.exp).await?;

    info!(role = %role, actor_id = identity.id, "login succeeded");

    Ok(TokenResponse {
        access_token: issued.token,
        token_type: "Bearer",
        user_type: role,
        user: identity.user,
    })
}

/// Check the email across all three identity tables.
async fn email_taken_anywhere(db: &DatabaseConnection, email: &str) -> Result<bool> {
    if Admins::find()
        .filter(admins::Column::Email.eq(email))
        .one(db)
        .await?
        .is_some()
    {
        return Ok(true);
    }
    if Trainers::find()
        .filter(trainers::Column::Email.eq(email))
        .one(db)
        .await?
        .is_some()
    {
        return Ok(true);
    }
    Ok(Secretaries::find()
        .filter(secretaries::Column::Email.eq(email))
        .one(db)
        .await?
        .is_some())
}

/// Create an identity in the requested role's table and log it in.
pub async fn register(
    db: &DatabaseConnection,
    jwt: &JwtManager,
    request: RegisterRequest,
) -> Result<TokenResponse> {
    let mut errors = FieldErrors::new();
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
    let role = match request.user_type.as_deref().map(str::trim) {
        None | Some("") => {
            errors.add("user_type", "The user_type field is required.");
            None
        }
        Some(value) => match StaffRole::parse(value) {
            Some(role) => Some(role),
            None => {
                errors.add("user_type", "The selected user_type is invalid.");
                None
            }
        },
    };

    if let Some(email) = email.as_deref()
        && email_taken_anywhere(db, email).await?
    {
        errors.add("email", "The email has already been taken.");
    }

    // Registration usually does not name a gym; attach to the first one.
    let gym_id = match request.gym_id {
        Some(id) => {
            if Gyms::find_by_id(id).one(db).await?.is_none() {
                errors.add("gym_id", "The selected gym is invalid.");
            }
            id
        }
        None => {
            let first = Gyms::find().one(db).await?.map(|g| g.id);
            match first {
                Some(id) => id,
                None => {
                    errors.add("gym_id", "The selected gym is invalid.");
                    0
                }
            }
        }
    };
    errors.into_result()?;

    let (first_name, last_name, email, password, role) = (
        first_name.unwrap(),
        last_name.unwrap(),
        email.unwrap(),
        password.unwrap(),
        role.unwrap(),
    );

    let password_hash = hash_password(&password)?;
    let now = Utc::now().naive_utc();
    let today = Utc::now().date_naive();

    let (actor_id, user) = match role {
        StaffRole::Owner => {
            let admin = admins::ActiveModel {
                gym_id: Set(gym_id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email.clone()),
                phone: Set(request.phone),
                password_hash: Set(password_hash),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            (admin.id, serde_json::to_value(&admin).unwrap_or_default())
        }
        StaffRole::Trainer => {
            let trainer = trainers::ActiveModel {
                gym_id: Set(gym_id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email.clone()),
                phone: Set(request.phone),
                password_hash: Set(password_hash),
                hire_date: Set(today),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            (trainer.id, serde_json::to_value(&trainer).unwrap_or_default())
        }
        StaffRole::FrontDesk => {
            let secretary = secretaries::ActiveModel {
                gym_id: Set(gym_id),
                first_name: Set(first_name),
                last_name: Set(last_name),
                email: Set(email.clone()),
                phone: Set(request.phone),
                password_hash: Set(password_hash),
                hire_date: Set(today),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            (
                secretary.id,
                serde_json::to_value(&secretary).unwrap_or_default(),
            )
        }
    };

    let issued = jwt.issue_token(role, actor_id, &email)?;
    register_token(db, role, actor_id, &issued.claims.jti, issued.claims.exp).await?;

    Ok(TokenResponse {
        access_token: issued.token,
        token_type: "Bearer",
        user_type: role,
        user,
    })
}

/// Revoke exactly the presented token.
pub async fn logout(db: &DatabaseConnection, jti: &str) -> Result<()> {
    AccessTokens::delete_many()
        .filter(access_tokens::Column::Jti.eq(jti))
        .exec(db)
        .await?;
    Ok(())
}

/// Resolve the caller's identity from its role table.
pub async fn current_user(
    db: &DatabaseConnection,
    role: StaffRole,
    actor_id: i32,
) -> Result<CurrentUserResponse> {
    let user = match role {
        StaffRole::Owner => Admins::find_by_id(actor_id)
            .one(db)
            .await?
            .map(|m| serde_json::to_value(&m).unwrap_or_default()),
        StaffRole::Trainer => Trainers::find_by_id(actor_id)
            .one(db)
            .await?
            .map(|m| serde_json::to_value(&m).unwrap_or_default()),
        StaffRole::FrontDesk => Secretaries::find_by_id(actor_id)
            .one(db)
            .await?
            .map(|m| serde_json::to_value(&m).unwrap_or_default()),
    };

    user.map(|user| CurrentUserResponse {
        user_type: role,
        user,
    })
    .ok_or_else(|| not_found!("user"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_all_fields() {
        let request = LoginRequest {
            email: None,
            password: Some("secret".into()),
            user_type: Some("owner".into()),
        };
        let mut errors = FieldErrors::new();
        errors.require("email", request.email.as_deref());
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_user_type_aliases() {
        assert_eq!(StaffRole::parse("admin"), Some(StaffRole::Owner));
        assert_eq!(StaffRole::parse("coach"), Some(StaffRole::Trainer));
        assert_eq!(StaffRole::parse("secretary"), Some(StaffRole::FrontDesk));
        assert_eq!(StaffRole::parse("member"), None);
    }
}
