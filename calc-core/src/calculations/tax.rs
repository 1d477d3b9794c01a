//! Progressive income tax calculation.
//!
//! Taxable income (PKP) is gross income minus the tax-free threshold (PTKP),
//! clamped at zero. It is then run through an ascending schedule of marginal
//! brackets:
//!
//! | Bracket | Width          | Rate |
//! |---------|----------------|------|
//! | 1       | 60,000,000     | 5%   |
//! | 2       | 190,000,000    | 15%  |
//! | 3       | 250,000,000    | 25%  |
//! | 4       | 4,500,000,000  | 30%  |
//! | 5       | unbounded      | 35%  |
//!
//! Income that lands exactly on a bracket boundary is consumed entirely by
//! the lower bracket; the next bracket contributes nothing and is not listed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::compute_tax;
//!
//! let result = compute_tax(dec!(310000000), dec!(0));
//!
//! assert_eq!(result.brackets.len(), 3);
//! assert_eq!(result.yearly_tax, dec!(46500000));
//! assert_eq!(result.effective_rate, dec!(15.00));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::calculations::common::{max, percentage_of, round_currency, round_to};
use crate::{BracketContribution, TaxBracket, TaxInput, TaxResult};

/// Computes income tax with the fixed bracket schedule.
pub fn compute_tax(
    gross_income: Decimal,
    ptkp: Decimal,
) -> TaxResult {
    compute_tax_with(TaxBracket::schedule(), gross_income, ptkp)
}

/// Computes income tax against an arbitrary ascending bracket schedule.
///
/// Income beyond the last bounded bracket is untaxed when the schedule has
/// no unbounded bracket.
pub fn compute_tax_with(
    schedule: &[TaxBracket],
    gross_income: Decimal,
    ptkp: Decimal,
) -> TaxResult {
    let taxable_income = max(gross_income - ptkp, Decimal::ZERO);

    let (total_tax, brackets) = apply_brackets(schedule, taxable_income);

    let yearly_tax = round_currency(total_tax);
    let monthly_tax = round_currency(yearly_tax / Decimal::from(12));
    let effective_rate = round_to(percentage_of(total_tax, taxable_income), 2);

    debug!(
        %gross_income,
        %taxable_income,
        %yearly_tax,
        brackets = brackets.len(),
        "computed income tax"
    );

    TaxResult {
        gross_income,
        ptkp,
        taxable_income,
        yearly_tax,
        monthly_tax,
        take_home: gross_income - yearly_tax,
        brackets,
        effective_rate,
    }
}

/// Accumulates marginal tax across the schedule.
///
/// Returns the exact total and the contributions of every bracket that
/// received a positive share of the income.
fn apply_brackets(
    schedule: &[TaxBracket],
    taxable_income: Decimal,
) -> (Decimal, Vec<BracketContribution>) {
    let mut remaining = taxable_income;
    let mut total_tax = Decimal::ZERO;
    let mut contributions = Vec::new();

    for bracket in schedule {
        if remaining <= Decimal::ZERO {
            break;
        }

        let amount = match bracket.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        if amount <= Decimal::ZERO {
            continue;
        }

        let tax = amount * bracket.rate;
        trace!(rate = %bracket.rate, %amount, %tax, "bracket contribution");

        total_tax += tax;
        remaining -= amount;
        contributions.push(BracketContribution {
            rate_label: bracket.rate_label(),
            rate: bracket.rate,
            amount,
            tax,
        });
    }

    (total_tax, contributions)
}

impl TaxInput {
    /// Runs [`compute_tax`] on this input.
    pub fn calculate(&self) -> TaxResult {
        compute_tax(self.gross_income, self.ptkp)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sum_tax(result: &TaxResult) -> Decimal {
        result.brackets.iter().map(|b| b.tax).sum()
    }

    fn sum_amount(result: &TaxResult) -> Decimal {
        result.brackets.iter().map(|b| b.amount).sum()
    }

    // =========================================================================
    // taxable income tests
    // =========================================================================

    #[test]
    fn taxable_income_subtracts_ptkp() {
        let result = compute_tax(dec!(100000000), dec!(54000000));

        assert_eq!(result.taxable_income, dec!(46000000));
    }

    #[test]
    fn taxable_income_clamps_at_zero_when_ptkp_exceeds_gross() {
        let result = compute_tax(dec!(40000000), dec!(54000000));

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.yearly_tax, Decimal::ZERO);
        assert!(result.brackets.is_empty());
        assert_eq!(result.take_home, dec!(40000000));
    }

    #[test]
    fn income_equal_to_ptkp_owes_nothing() {
        for x in [dec!(0), dec!(54000000), dec!(123456789.5)] {
            let result = compute_tax(x, x);

            assert_eq!(result.taxable_income, Decimal::ZERO);
            assert_eq!(result.yearly_tax, Decimal::ZERO);
            assert_eq!(result.monthly_tax, Decimal::ZERO);
            assert_eq!(result.effective_rate, Decimal::ZERO);
            assert!(result.brackets.is_empty());
        }
    }

    // =========================================================================
    // bracket tests
    // =========================================================================

    #[test]
    fn first_bracket_boundary_emits_single_entry() {
        let result = compute_tax(dec!(60000000), dec!(0));

        assert_eq!(
            result.brackets,
            vec![BracketContribution {
                rate_label: "5%".to_string(),
                rate: dec!(0.05),
                amount: dec!(60000000),
                tax: dec!(3000000),
            }]
        );
        assert_eq!(result.yearly_tax, dec!(3000000));
        assert_eq!(result.effective_rate, dec!(5.00));
    }

    #[test]
    fn partial_third_bracket() {
        let result = compute_tax(dec!(310000000), dec!(0));

        let labels: Vec<&str> = result.brackets.iter().map(|b| b.rate_label.as_str()).collect();
        assert_eq!(labels, vec!["5%", "15%", "25%"]);

        assert_eq!(result.brackets[0].tax, dec!(3000000));
        assert_eq!(result.brackets[1].amount, dec!(190000000));
        assert_eq!(result.brackets[1].tax, dec!(28500000));
        assert_eq!(result.brackets[2].amount, dec!(60000000));
        assert_eq!(result.brackets[2].tax, dec!(15000000));
        assert_eq!(result.yearly_tax, dec!(46500000));
        assert_eq!(result.monthly_tax, dec!(3875000));
        assert_eq!(result.take_home, dec!(263500000));
        assert_eq!(result.effective_rate, dec!(15.00));
    }

    #[test]
    fn income_reaching_top_bracket_uses_all_five() {
        let result = compute_tax(dec!(6000000000), dec!(0));

        assert_eq!(result.brackets.len(), 5);
        assert_eq!(result.brackets[3].amount, dec!(4500000000));
        assert_eq!(result.brackets[4].rate_label, "35%");
        assert_eq!(result.brackets[4].amount, dec!(1000000000));
        // 3,000,000 + 28,500,000 + 62,500,000 + 1,350,000,000 + 350,000,000
        assert_eq!(result.yearly_tax, dec!(1794000000));
        assert_eq!(result.effective_rate, dec!(29.90));
    }

    #[test]
    fn bracket_sums_match_totals() {
        let cases = [
            (dec!(75000000), dec!(54000000)),
            (dec!(250000001), dec!(0)),
            (dec!(999999999.99), dec!(58500000)),
            (dec!(5000000123), dec!(72000000)),
            (dec!(61), dec!(0)),
        ];

        for (gross, ptkp) in cases {
            let result = compute_tax(gross, ptkp);

            assert_eq!(sum_amount(&result), result.taxable_income);
            assert_eq!(round_currency(sum_tax(&result)), result.yearly_tax);
        }
    }

    #[test]
    fn fractional_tax_is_rounded_half_up() {
        // 61 * 5% = 3.05 -> 3, 70 * 5% = 3.5 -> 4
        assert_eq!(compute_tax(dec!(61), dec!(0)).yearly_tax, dec!(3));
        assert_eq!(compute_tax(dec!(70), dec!(0)).yearly_tax, dec!(4));
    }

    #[test]
    fn take_home_is_not_rounded() {
        let result = compute_tax(dec!(100.4), dec!(0));

        // 100.4 * 5% = 5.02 -> 5
        assert_eq!(result.yearly_tax, dec!(5));
        assert_eq!(result.take_home, dec!(95.4));
    }

    #[test]
    fn custom_schedule_without_unbounded_bracket_caps_tax() {
        let schedule = [TaxBracket {
            width: Some(dec!(1000)),
            rate: dec!(0.10),
        }];

        let result = compute_tax_with(&schedule, dec!(5000), dec!(0));

        assert_eq!(result.brackets.len(), 1);
        assert_eq!(result.yearly_tax, dec!(100));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = TaxInput {
            gross_income: dec!(480000000),
            ptkp: dec!(63000000),
        };

        assert_eq!(input.calculate(), input.calculate());
    }
}
