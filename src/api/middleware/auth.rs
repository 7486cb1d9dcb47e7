//! # Authentication middleware
//!
//! Extracts the bearer token, validates it, checks the revocation registry
//! and injects the resolved caller into the request extensions. Role gates
//! sit as a second layer on each route group.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use entity::{StaffRole, access_tokens, access_tokens::Entity as AccessTokens};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::api::server::AppState;
use crate::error::AppError;
use crate::{forbidden, unauthorized};

/// The authenticated caller, threaded into every controller call.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Role the presented token is scoped to.
    pub role: StaffRole,
    /// Id in that role's identity table.
    pub actor_id: i32,
    /// Token id, needed by logout to revoke exactly this token.
    pub jti: String,
}

/// Bearer-token authentication middleware.
///
/// Rejects with 401 on a missing, malformed, expired or revoked token.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized!("missing authorization header"))?;

    let token = crate::auth::extract_bearer_token(header)
        .ok_or_else(|| unauthorized!("invalid authorization header"))?;

    let claims = state.jwt.validate_token(token)?;

    // A valid signature is not enough: logout deletes the registry row, which
    // must invalidate the token immediately.
    let registered = AccessTokens::find()
        .filter(access_tokens::Column::Jti.eq(claims.jti.clone()))
        .one(state.db.as_ref())
        .await?;
    if registered.is_none() {
        return Err(unauthorized!("token revoked"));
    }

    let context = Arc::new(AuthContext {
        role: claims.role,
        actor_id: claims.sub,
        jti: claims.jti,
    });
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Role gate for a route group.
///
/// Must run after [`authenticate`]; a valid token with the wrong scope gets
/// 403, not 401.
pub async fn require_role(
    required: StaffRole,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let context = request
        .extensions()
        .get::<Arc<AuthContext>>()
        .ok_or_else(|| unauthorized!("unauthenticated"))?;

    if context.role != required {
        return Err(forbidden!(
            "this action requires the {} role",
            required.as_str()
        ));
    }

    Ok(next.run(request).await)
}
