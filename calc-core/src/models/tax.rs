use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input to the progressive income tax calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Tax-free threshold deducted before the brackets apply.
    pub ptkp: Decimal,
}

/// The share of tax attributable to one marginal bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    /// Rate as shown to the user, e.g. `"25%"`.
    pub rate_label: String,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
    /// Taxable income that fell into this bracket (exact).
    pub amount: Decimal,
    /// Tax charged on `amount` (exact).
    pub tax: Decimal,
}

/// Result of the progressive income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub ptkp: Decimal,
    /// Income subject to the brackets (PKP), never negative.
    pub taxable_income: Decimal,
    /// Total annual tax, rounded to whole units.
    pub yearly_tax: Decimal,
    /// `yearly_tax / 12`, rounded to whole units.
    pub monthly_tax: Decimal,
    /// `gross_income - yearly_tax`, not rounded.
    pub take_home: Decimal,
    /// Brackets with a nonzero contribution, lowest first.
    pub brackets: Vec<BracketContribution>,
    /// Tax as a percentage of taxable income, two decimals.
    pub effective_rate: Decimal,
}
