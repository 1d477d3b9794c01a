//! Fixed-rate mortgage (annuity) calculation.
//!
//! The loan principal is the property price less the down payment. Repayment
//! is a constant monthly instalment given by the annuity formula:
//!
//! ```text
//! payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `r` is the monthly rate (`yearly% / 100 / 12`) and `n` the number of
//! months. A loan with a zero rate or zero months has no computed payment:
//! payment, total payment and total interest are all zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::compute_mortgage;
//!
//! let result = compute_mortgage(dec!(1000000000), dec!(20), dec!(8.5), 15);
//!
//! assert_eq!(result.principal, dec!(800000000));
//! assert_eq!(result.tenor_months, 180);
//! assert!(result.monthly_payment > dec!(7870000) && result.monthly_payment < dec!(7885000));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{percentage_of, round_currency, round_to, saturating_div};
use crate::{MortgageInput, MortgageResult};

const MONTHS_PER_YEAR: u32 = 12;

/// Computes the monthly instalment and totals for a fixed-rate mortgage.
pub fn compute_mortgage(
    property_price: Decimal,
    down_payment_percent: Decimal,
    yearly_rate_percent: Decimal,
    tenor_years: u32,
) -> MortgageResult {
    let down_payment =
        saturating_div(property_price.saturating_mul(down_payment_percent), Decimal::ONE_HUNDRED);
    let principal = property_price.saturating_sub(down_payment);
    let monthly_rate = yearly_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR);
    let tenor_months = tenor_years.saturating_mul(MONTHS_PER_YEAR);

    let (monthly_payment, total_payment, total_interest) =
        if monthly_rate.is_zero() || tenor_months == 0 {
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        } else {
            let payment = annuity_payment(principal, monthly_rate, tenor_months);
            let total = payment.saturating_mul(Decimal::from(tenor_months));
            (payment, total, total.saturating_sub(principal))
        };

    let interest_ratio = round_to(percentage_of(total_interest, principal), 1);

    debug!(
        %principal,
        %monthly_rate,
        tenor_months,
        monthly_payment = %round_currency(monthly_payment),
        "computed mortgage"
    );

    // Reported principal is taken from the rounded parts so that down
    // payment plus principal always equals the rounded price.
    let down_payment = round_currency(down_payment);

    MortgageResult {
        down_payment,
        principal: round_currency(property_price).saturating_sub(down_payment),
        monthly_rate,
        tenor_months,
        monthly_payment: round_currency(monthly_payment),
        total_payment: round_currency(total_payment),
        total_interest: round_currency(total_interest),
        interest_ratio,
    }
}

/// Instalment that repays `principal` over `months` periods at `rate`.
///
/// The growth ratio `(1 + rate)^months / ((1 + rate)^months - 1)` tends to
/// one as the growth factor grows, so when any step is too large for a
/// [`Decimal`] the payment is taken at its limit of `principal * rate`.
fn annuity_payment(
    principal: Decimal,
    rate: Decimal,
    months: u32,
) -> Decimal {
    let limit = principal.saturating_mul(rate);
    match compound(rate, months) {
        Some(growth) if growth != Decimal::ONE => growth
            .checked_sub(Decimal::ONE)
            .and_then(|excess| growth.checked_div(excess))
            .and_then(|ratio| limit.checked_mul(ratio))
            .unwrap_or_else(|| {
                warn!(%rate, months, "annuity overflowed, using limiting payment");
                limit
            }),
        // Rate too small to register: repay the principal evenly.
        Some(_) => principal / Decimal::from(months),
        None => {
            warn!(%rate, months, "growth factor overflowed, using limiting payment");
            limit
        }
    }
}

/// Computes `(1 + rate)^n` by squaring, `None` on overflow.
///
/// The base is only squared while higher exponent bits remain, so an
/// intermediate never exceeds the final result when `1 + rate > 1`.
fn compound(
    rate: Decimal,
    n: u32,
) -> Option<Decimal> {
    let mut base = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    let mut n = n;
    while n > 0 {
        if n & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        n >>= 1;
        if n > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

impl MortgageInput {
    /// Runs [`compute_mortgage`] on this input.
    pub fn calculate(&self) -> MortgageResult {
        compute_mortgage(
            self.property_price,
            self.down_payment_percent,
            self.yearly_rate_percent,
            self.tenor_years,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // principal tests
    // =========================================================================

    #[test]
    fn principal_is_price_less_down_payment() {
        let result = compute_mortgage(dec!(500000000), dec!(30), dec!(6), 10);

        assert_eq!(result.down_payment, dec!(150000000));
        assert_eq!(result.principal, dec!(350000000));
    }

    #[test]
    fn down_payment_is_rounded() {
        // 1,000,001 * 15% = 150,000.15
        let result = compute_mortgage(dec!(1000001), dec!(15), dec!(0), 1);

        assert_eq!(result.down_payment, dec!(150000));
        assert_eq!(result.principal, dec!(850001));
    }

    #[test]
    fn rounded_parts_add_up_to_price() {
        // 1.5 rounds up to 2, leaving 1 of the price of 3
        let result = compute_mortgage(dec!(3), dec!(50), dec!(0), 1);

        assert_eq!(result.down_payment, dec!(2));
        assert_eq!(result.principal, dec!(1));

        let result = compute_mortgage(dec!(1000001), dec!(50), dec!(6), 10);
        assert_eq!(result.down_payment + result.principal, dec!(1000001));
    }

    // =========================================================================
    // degenerate loan tests
    // =========================================================================

    #[test]
    fn zero_rate_has_no_payment_or_interest() {
        for tenor in [0, 1, 15, 30] {
            let result = compute_mortgage(dec!(800000000), dec!(10), dec!(0), tenor);

            assert_eq!(result.monthly_payment, Decimal::ZERO);
            assert_eq!(result.total_payment, Decimal::ZERO);
            assert_eq!(result.total_interest, Decimal::ZERO);
            assert_eq!(result.tenor_months, tenor * 12);
        }
    }

    #[test]
    fn zero_tenor_has_no_payment() {
        let result = compute_mortgage(dec!(800000000), dec!(10), dec!(7), 0);

        assert_eq!(result.tenor_months, 0);
        assert_eq!(result.monthly_payment, Decimal::ZERO);
        assert_eq!(result.total_interest, Decimal::ZERO);
        assert_eq!(result.interest_ratio, Decimal::ZERO);
    }

    #[test]
    fn full_down_payment_has_zero_interest_ratio() {
        let result = compute_mortgage(dec!(800000000), dec!(100), dec!(7), 20);

        assert_eq!(result.principal, Decimal::ZERO);
        assert_eq!(result.monthly_payment, Decimal::ZERO);
        assert_eq!(result.interest_ratio, Decimal::ZERO);
    }

    // =========================================================================
    // annuity tests
    // =========================================================================

    #[test]
    fn monthly_rate_is_yearly_over_twelve() {
        let result = compute_mortgage(dec!(1000000000), dec!(20), dec!(8.5), 15);

        assert_eq!(result.monthly_rate.round_dp(7), dec!(0.0070833));
        assert_eq!(result.tenor_months, 180);
    }

    #[test]
    fn reference_loan_matches_closed_form() {
        let result = compute_mortgage(dec!(1000000000), dec!(20), dec!(8.5), 15);

        assert_eq!(result.principal, dec!(800000000));
        assert!(
            result.monthly_payment > dec!(7870000) && result.monthly_payment < dec!(7885000),
            "monthly payment {} outside expected range",
            result.monthly_payment
        );

        // Totals are derived from the unrounded payment, so allow one unit
        // per month of drift against the rounded figure.
        let approx_total = result.monthly_payment * dec!(180);
        assert!((result.total_payment - approx_total).abs() <= dec!(180));
        assert_eq!(result.total_interest, result.total_payment - result.principal);
        assert_eq!(result.interest_ratio, dec!(77.3));
    }

    #[test]
    fn reference_loan_exact_figures() {
        let result = compute_mortgage(dec!(1000000000), dec!(20), dec!(8.5), 15);

        // 7,877,916.463... per month, 1,418,024,963.41... in total
        assert_eq!(result.monthly_payment, dec!(7877916));
        assert_eq!(result.total_payment, dec!(1418024963));
        assert_eq!(result.total_interest, dec!(618024963));
    }

    #[test]
    fn one_year_loan_at_one_percent_monthly() {
        let result = compute_mortgage(dec!(1200000), dec!(0), dec!(12), 1);

        // payment = 1,200,000 * 0.01 * 1.01^12 / (1.01^12 - 1) = 106,618.546...
        assert_eq!(result.tenor_months, 12);
        assert_eq!(result.monthly_payment, dec!(106619));
        // 12 * 106,618.546... = 1,279,422.557...
        assert_eq!(result.total_payment, dec!(1279423));
        assert_eq!(result.total_interest, dec!(79423));
        assert_eq!(result.interest_ratio, dec!(6.6));
    }

    #[test]
    fn payment_falls_as_tenor_grows() {
        let short = compute_mortgage(dec!(600000000), dec!(20), dec!(9), 10);
        let long = compute_mortgage(dec!(600000000), dec!(20), dec!(9), 25);

        assert!(long.monthly_payment < short.monthly_payment);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn overflowing_growth_uses_limiting_payment() {
        // (1 + 10)^1200 does not fit in a Decimal
        let result = compute_mortgage(dec!(1000), dec!(0), dec!(13200), 100);

        assert_eq!(result.monthly_rate, dec!(11));
        assert_eq!(result.monthly_payment, dec!(11000));
    }

    #[test]
    fn payment_near_growth_limit_does_not_overflow() {
        // (1 + r)^n still fits for these tenors but P * r * (1 + r)^n does not
        for years in [600, 680, 700, 750, 800] {
            let result = compute_mortgage(dec!(1000000000), dec!(20), dec!(8.5), years);

            assert_eq!(result.tenor_months, years * 12);
            assert_eq!(result.monthly_payment, dec!(5666667), "tenor {years}");
        }
    }

    #[test]
    fn tiny_rate_over_huge_tenor_is_computed() {
        let result = compute_mortgage(dec!(1000000000), dec!(0), dec!(0.0000001), u32::MAX);

        assert_eq!(result.tenor_months, u32::MAX);
        assert!(result.total_payment > result.principal);
        assert!(result.total_interest > Decimal::ZERO);
    }

    #[test]
    fn compound_raises_growth_factor() {
        assert_eq!(compound(dec!(0.1), 0), Some(Decimal::ONE));
        assert_eq!(compound(dec!(0.1), 2), Some(dec!(1.21)));
        assert_eq!(compound(dec!(0.1), 3), Some(dec!(1.331)));
        assert_eq!(compound(dec!(1), 10), Some(dec!(1024)));
        assert_eq!(compound(dec!(11), 1200), None);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = MortgageInput {
            property_price: dec!(750000000),
            down_payment_percent: dec!(15),
            yearly_rate_percent: dec!(7.25),
            tenor_years: 20,
        };

        assert_eq!(input.calculate(), input.calculate());
    }
}
