use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input to the fixed-rate mortgage calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub property_price: Decimal,
    /// Down payment as a percentage of the price (20 for 20%).
    pub down_payment_percent: Decimal,
    /// Nominal yearly interest rate as a percentage (8.5 for 8.5%).
    pub yearly_rate_percent: Decimal,
    pub tenor_years: u32,
}

/// Result of the fixed-rate mortgage calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub down_payment: Decimal,
    /// Loan amount after the down payment.
    pub principal: Decimal,
    /// Periodic rate as a fraction, not rounded.
    pub monthly_rate: Decimal,
    pub tenor_months: u32,
    /// Zero for an interest-free or zero-length loan.
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    /// Total interest as a percentage of the principal, one decimal.
    pub interest_ratio: Decimal,
}
