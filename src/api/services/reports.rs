//! # Reporting service
//!
//! Dashboard report endpoints. The figures are placeholder data shaped like
//! the final reports: real plan names from the database, randomized amounts.
//! These answer with the legacy `{success, data}` envelope.

use chrono::{Datelike, Months, Utc};
use entity::{membership_plans, membership_plans::Entity as MembershipPlans};
use rand::Rng;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::error::Result;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Serialize)]
pub struct MonthlyFinancials {
    pub month: &'static str,
    pub year: i32,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Serialize)]
pub struct PlanDistribution {
    pub plan: String,
    pub members: i32,
}

/// Revenue and expenses for the last six months, oldest first.
pub fn financial_summary() -> Vec<MonthlyFinancials> {
    let mut rng = rand::thread_rng();
    let now = Utc::now().date_naive();

    (0u32..6)
        .rev()
        .map(|offset| {
            let month = now - Months::new(offset);
            MonthlyFinancials {
                month: MONTH_NAMES[month.month0() as usize],
                year: month.year(),
                revenue: f64::from(rng.gen_range(8_000..25_000)),
                expenses: f64::from(rng.gen_range(3_000..12_000)),
            }
        })
        .collect()
}

/// Member counts per active plan.
pub async fn membership_distribution(db: &DatabaseConnection) -> Result<Vec<PlanDistribution>> {
    let plans = MembershipPlans::find()
        .filter(membership_plans::Column::IsActive.eq(true))
        .order_by_asc(membership_plans::Column::Name)
        .all(db)
        .await?;

    let mut rng = rand::thread_rng();
    Ok(plans
        .into_iter()
        .map(|plan| PlanDistribution {
            plan: plan.name,
            members: rng.gen_range(5..120),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_summary_covers_six_months() {
        let summary = financial_summary();
        assert_eq!(summary.len(), 6);
        for entry in &summary {
            assert!(entry.revenue >= 8_000.0);
            assert!(entry.expenses >= 3_000.0);
        }
    }

    #[test]
    fn test_summary_ends_with_current_month() {
        let summary = financial_summary();
        let now = Utc::now().date_naive();
        let last = summary.last().unwrap();
        assert_eq!(last.month, MONTH_NAMES[now.month0() as usize]);
        assert_eq!(last.year, now.year());
    }
}
