//! Parsing of raw user input into calculator parameters.
//!
//! The calculators never see malformed input: anything missing or
//! unparsable is replaced by the documented default before the call.

use calc_core::PtkpStatus;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// thousands separators (`,` and `_`).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace([',', '_'], "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a string into an optional [`Decimal`].
///
/// Returns `None` for empty or whitespace-only input, or when parsing fails
/// (logs a warning on parse failure).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    if normalize_decimal_input(s).is_empty() {
        return None;
    }
    parse_decimal(s).map_or_else(
        |e| {
            tracing::warn!(input = %s, "ignoring input: {}", e);
            None
        },
        Some,
    )
}

/// Parses `input`, falling back to `default` when it is absent or invalid.
pub fn decimal_or(
    input: Option<&str>,
    default: Decimal,
) -> Decimal {
    input.and_then(parse_optional_decimal).unwrap_or(default)
}

/// Parses a whole number of years, falling back to `default`.
///
/// Fractional input is truncated; negative or oversized input falls back.
pub fn years_or(
    input: Option<&str>,
    default: u32,
) -> u32 {
    input
        .and_then(parse_optional_decimal)
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(default)
}

/// Parses a PTKP value given either as a status code (`K/1`) or an amount.
pub fn ptkp_or(
    input: Option<&str>,
    default: Decimal,
) -> Decimal {
    match input.map(PtkpStatus::parse) {
        Some(Some(status)) => status.amount(),
        _ => decimal_or(input, default),
    }
}
