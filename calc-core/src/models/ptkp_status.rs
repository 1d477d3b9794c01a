use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Standard tax-free threshold (PTKP) categories.
///
/// `TK` is unmarried, `K` is married; the digit is the number of dependants
/// (capped at three).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PtkpStatus {
    #[default]
    Single,
    Married,
    MarriedOneDependant,
    MarriedTwoDependants,
    MarriedThreeDependants,
}

impl PtkpStatus {
    pub fn all() -> &'static [PtkpStatus] {
        &[
            Self::Single,
            Self::Married,
            Self::MarriedOneDependant,
            Self::MarriedTwoDependants,
            Self::MarriedThreeDependants,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "TK/0",
            Self::Married => "K/0",
            Self::MarriedOneDependant => "K/1",
            Self::MarriedTwoDependants => "K/2",
            Self::MarriedThreeDependants => "K/3",
        }
    }

    /// Parses a status code. Case-insensitive; `TK0` is accepted for `TK/0`.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_uppercase().replace('/', "");
        match code.as_str() {
            "TK0" => Some(Self::Single),
            "K0" => Some(Self::Married),
            "K1" => Some(Self::MarriedOneDependant),
            "K2" => Some(Self::MarriedTwoDependants),
            "K3" => Some(Self::MarriedThreeDependants),
            _ => None,
        }
    }

    /// Annual tax-free threshold for this status.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Single => dec!(54000000),
            Self::Married => dec!(58500000),
            Self::MarriedOneDependant => dec!(63000000),
            Self::MarriedTwoDependants => dec!(67500000),
            Self::MarriedThreeDependants => dec!(72000000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single, no dependants",
            Self::Married => "Married, no dependants",
            Self::MarriedOneDependant => "Married, 1 dependant",
            Self::MarriedTwoDependants => "Married, 2 dependants",
            Self::MarriedThreeDependants => "Married, 3 dependants",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_with_and_without_slash() {
        assert_eq!(PtkpStatus::parse("TK/0"), Some(PtkpStatus::Single));
        assert_eq!(PtkpStatus::parse("tk0"), Some(PtkpStatus::Single));
        assert_eq!(PtkpStatus::parse(" k/2 "), Some(PtkpStatus::MarriedTwoDependants));
        assert_eq!(PtkpStatus::parse("K/4"), None);
        assert_eq!(PtkpStatus::parse("54000000"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in PtkpStatus::all() {
            assert_eq!(PtkpStatus::parse(status.as_str()), Some(*status));
        }
    }

    #[test]
    fn amounts_increase_with_dependants() {
        let amounts: Vec<Decimal> = PtkpStatus::all().iter().map(|s| s.amount()).collect();

        assert_eq!(amounts[0], dec!(54000000));
        assert!(amounts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(amounts[4] - amounts[1], dec!(13500000));
    }
}
