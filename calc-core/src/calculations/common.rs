//! Common utility functions for the calculators.
//!
//! Every calculator rounds with the same rule: half away from zero. Currency
//! amounts are rounded to whole units, percentages to a fixed number of
//! decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to `dp` decimal places using half-up rounding.
///
/// Values at exactly the midpoint are rounded away from zero, so `2.5`
/// becomes `3` and `-2.5` becomes `-3`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_to;
///
/// assert_eq!(round_to(dec!(12.345), 2), dec!(12.35));
/// assert_eq!(round_to(dec!(12.344), 2), dec!(12.34));
/// assert_eq!(round_to(dec!(-0.05), 1), dec!(-0.1));
/// ```
pub fn round_to(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to the nearest whole currency unit (half away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_currency(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_currency(dec!(-1234.5)), dec!(-1235));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    round_to(value, 0)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Divides, clamping to [`Decimal::MAX`] or [`Decimal::MIN`] when the
/// quotient is out of range. The caller guards against a zero divisor.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::saturating_div;
///
/// assert_eq!(saturating_div(dec!(10), dec!(4)), dec!(2.5));
/// assert_eq!(saturating_div(dec!(10000000), dec!(0.0000000000000000000001)), Decimal::MAX);
/// ```
pub fn saturating_div(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Returns `numerator / denominator * 100`, or zero when the denominator is
/// zero.
pub fn percentage_of(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    saturating_div(numerator, denominator).saturating_mul(Decimal::ONE_HUNDRED)
}
