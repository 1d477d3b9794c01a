use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input to the freelance rate calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreelanceInput {
    pub monthly_expenses: Decimal,
    pub monthly_savings: Decimal,
    /// Expected billable hours per month.
    pub billable_hours: Decimal,
}

/// Suggested rates for a freelancer to meet a monthly income target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreelanceResult {
    /// Monthly expenses plus savings.
    pub target_income: Decimal,
    pub hourly_rate: Decimal,
    /// Eight billable hours.
    pub daily_rate: Decimal,
    /// Forty billable hours.
    pub weekly_rate: Decimal,
    /// Lower end of the negotiating band (90% of hourly).
    pub min_hourly_rate: Decimal,
    /// Upper end of the negotiating band (130% of hourly).
    pub max_hourly_rate: Decimal,
}
