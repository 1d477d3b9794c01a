//! Display formatting for engine results.
//!
//! The calculators return plain numbers; these helpers turn them into the
//! strings shown to the user. Only the presentation layer should call them.

use rust_decimal::Decimal;

use crate::calculations::common::round_currency;

const CURRENCY_SYMBOL: &str = "Rp";
const GROUP_SEPARATOR: char = '.';

/// Formats an amount as whole rupiah, e.g. `Rp 1.234.567`.
///
/// Fractions are rounded half away from zero; negative amounts carry a
/// leading minus sign (`-Rp 1.500`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(46500000)), "Rp 46.500.000");
/// assert_eq!(format_currency(dec!(999.5)), "Rp 1.000");
/// assert_eq!(format_currency(dec!(-1500)), "-Rp 1.500");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{CURRENCY_SYMBOL} {}", group_thousands(&digits))
}

/// Formats a percentage with a fixed number of decimals, e.g. `15.00%`.
pub fn format_percent(
    value: Decimal,
    dp: usize,
) -> String {
    format!("{value:.dp$}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
