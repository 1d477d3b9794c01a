//! Freelance rate calculation.
//!
//! The monthly income target (expenses plus savings) is spread over the
//! expected billable hours to give an hourly rate. Daily and weekly rates
//! assume 8 and 40 billable hours; the negotiating band runs from 90% to
//! 130% of the hourly rate.
//!
//! Amounts too large for a [`Decimal`] saturate at [`Decimal::MAX`] (or
//! [`Decimal::MIN`] for negative targets) instead of overflowing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::compute_freelance_rate;
//!
//! let result = compute_freelance_rate(dec!(10000000), dec!(5000000), dec!(120));
//!
//! assert_eq!(result.hourly_rate, dec!(125000));
//! assert_eq!(result.daily_rate, dec!(1000000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::{round_currency, saturating_div};
use crate::{FreelanceInput, FreelanceResult};

const HOURS_PER_DAY: Decimal = dec!(8);
const HOURS_PER_WEEK: Decimal = dec!(40);
const MIN_RATE_FACTOR: Decimal = dec!(0.9);
const MAX_RATE_FACTOR: Decimal = dec!(1.3);

/// Computes the rates needed to cover monthly expenses and savings.
pub fn compute_freelance_rate(
    monthly_expenses: Decimal,
    monthly_savings: Decimal,
    billable_hours: Decimal,
) -> FreelanceResult {
    let target_income = monthly_expenses.saturating_add(monthly_savings);
    let hourly_rate = if billable_hours.is_zero() {
        Decimal::ZERO
    } else {
        saturating_div(target_income, billable_hours)
    };

    debug!(%target_income, %billable_hours, %hourly_rate, "computed freelance rate");

    FreelanceResult {
        target_income: round_currency(target_income),
        hourly_rate: round_currency(hourly_rate),
        daily_rate: round_currency(hourly_rate.saturating_mul(HOURS_PER_DAY)),
        weekly_rate: round_currency(hourly_rate.saturating_mul(HOURS_PER_WEEK)),
        min_hourly_rate: round_currency(hourly_rate.saturating_mul(MIN_RATE_FACTOR)),
        max_hourly_rate: round_currency(hourly_rate.saturating_mul(MAX_RATE_FACTOR)),
    }
}

impl FreelanceInput {
    /// Runs [`compute_freelance_rate`] on this input.
    pub fn calculate(&self) -> FreelanceResult {
        compute_freelance_rate(
            self.monthly_expenses,
            self.monthly_savings,
            self.billable_hours,
        )
    }
}
