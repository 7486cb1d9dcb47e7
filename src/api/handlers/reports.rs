//! # Reporting handlers
//!
//! These answer with the legacy `{success, data}` envelope rather than the
//! standard one.

use axum::extract::State;

use crate::api::response::LegacyResponse;
use crate::api::server::AppState;
use crate::api::services;
use crate::error::Result;

pub async fn financial_summary(
    State(_state): State<AppState>,
) -> Result<LegacyResponse<Vec<services::reports::MonthlyFinancials>>> {
    Ok(LegacyResponse::ok(services::reports::financial_summary()))
}

pub async fn membership_distribution(
    State(state): State<AppState>,
) -> Result<LegacyResponse<Vec<services::reports::PlanDistribution>>> {
    let distribution = services::reports::membership_distribution(state.db.as_ref()).await?;
    Ok(LegacyResponse::ok(distribution))
}
